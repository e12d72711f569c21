//! Agent registry for AI coding agent configurations.
//!
//! This module provides a single read-only table of the AI coding agents
//! (Claude, Codex, Gemini, Copilot, Qwen, Cursor, Amp, DeepSeek) that a dev
//! container can host, together with the mounts and credential variables
//! each one needs.
//!
//! # Architecture
//!
//! Each agent has its own module holding a `const` [`AgentDescriptor`]:
//! - Name, display name and command name
//! - Config directory paths, relative to the host and container home
//! - Default and fallback credential environment variables
//! - Whether the agent needs special credential handling
//!
//! Per-agent behaviour is pure data, so the registry is a `static` slice of
//! descriptors rather than a set of trait objects.
//!
//! # Adding a New Agent
//!
//! 1. Create a new file in `src/agents/` (e.g., `newagent.rs`) with a `DESCRIPTOR`
//! 2. Add the descriptor to `AGENTS` in this file
//! 3. Add a variant to the `Agent` enum and wire it in `descriptor()` and `parse()`
//! 4. Add the module declaration below

mod amp;
mod claude;
mod codex;
mod copilot;
mod cursor;
mod deepseek;
mod gemini;
mod qwen;

use crate::config::{Mount, MountConfig};
use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Static description of one AI coding agent's filesystem and credential conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentDescriptor {
    /// Unique registry name
    pub name: &'static str,

    /// Display name for UI
    pub display_name: &'static str,

    /// Command name used to execute the agent
    pub command_name: &'static str,

    /// Config directory relative to the home directory (e.g. ".claude", ".config/amp")
    pub config_dir: &'static str,

    /// Environment variable holding the agent's API key
    pub default_credential_env_var: &'static str,

    /// Secondary variables the same provider also reads
    pub fallback_credential_env_vars: &'static [&'static str],

    /// Needs a credential overlay instead of a plain config mount
    pub requires_special_handling: bool,

    /// Config directory paths: (host_path, container_path), both relative to home
    pub config_dir_paths: &'static [(&'static str, &'static str)],
}

impl AgentDescriptor {
    /// Default credential variable followed by its fallbacks
    pub fn credential_env_vars(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.default_credential_env_var)
            .chain(self.fallback_credential_env_vars.iter().copied())
    }

    /// Mounts for this agent with the default container layout
    pub fn mounts(&self, home_dir: impl AsRef<Path>) -> Vec<Mount> {
        get_mounts(self, home_dir)
    }
}

static AGENTS: [AgentDescriptor; 8] = [
    claude::DESCRIPTOR,
    codex::DESCRIPTOR,
    gemini::DESCRIPTOR,
    copilot::DESCRIPTOR,
    qwen::DESCRIPTOR,
    cursor::DESCRIPTOR,
    amp::DESCRIPTOR,
    deepseek::DESCRIPTOR,
];

/// All supported agents, in registry order
pub fn list_agents() -> &'static [AgentDescriptor] {
    &AGENTS
}

/// Look up a descriptor by its exact registry name
pub fn find_agent(name: &str) -> Option<&'static AgentDescriptor> {
    AGENTS.iter().find(|descriptor| descriptor.name == name)
}

/// Derive the mounts for an agent with the default container layout.
///
/// No I/O is performed: the host paths are `home_dir` joined with the
/// agent's config directory whether or not it exists.
pub fn get_mounts(descriptor: &AgentDescriptor, home_dir: impl AsRef<Path>) -> Vec<Mount> {
    get_mounts_with(descriptor, home_dir, &MountConfig::default())
}

/// Derive the mounts for an agent using explicit mount options
pub fn get_mounts_with(
    descriptor: &AgentDescriptor,
    home_dir: impl AsRef<Path>,
    config: &MountConfig,
) -> Vec<Mount> {
    let home_dir = home_dir.as_ref();
    if !home_dir.is_absolute() {
        warn!(
            "Home directory '{}' is not absolute, mounts for {} will be relative",
            home_dir.display(),
            descriptor.display_name
        );
    }

    let mounts: Vec<Mount> = descriptor
        .config_dir_paths
        .iter()
        .map(|(host, container)| Mount {
            host_path: home_dir.join(host),
            container_path: config.container_home.join(container),
            read_only: config.read_only,
        })
        .collect();

    debug!(
        "Derived {} mount(s) for agent '{}' from {}",
        mounts.len(),
        descriptor.name,
        home_dir.display()
    );
    mounts
}

/// Mounts for every registered agent, in registry order
pub fn get_all_mounts(home_dir: impl AsRef<Path>, config: &MountConfig) -> Vec<Mount> {
    let home_dir = home_dir.as_ref();
    AGENTS
        .iter()
        .flat_map(|descriptor| get_mounts_with(descriptor, home_dir, config))
        .collect()
}

/// Every environment variable name that should be proxied into the container,
/// including provider fallbacks (e.g. GOOGLE_API_KEY for Gemini)
pub fn list_default_credential_env_vars() -> BTreeSet<&'static str> {
    AGENTS
        .iter()
        .flat_map(AgentDescriptor::credential_env_vars)
        .collect()
}

/// Keep the caller-supplied variables that are known credentials and non-empty.
/// Input order is preserved.
pub fn select_credential_env<I, K, V>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let known = list_default_credential_env_vars();
    vars.into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .filter(|(key, value)| !value.is_empty() && known.contains(key.as_str()))
        .collect()
}

/// Supported AI agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Claude,
    Codex,
    Gemini,
    Copilot,
    Qwen,
    Cursor,
    Amp,
    DeepSeek,
}

impl Agent {
    /// All variants, in registry order
    pub fn all() -> &'static [Agent] {
        &[
            Self::Claude,
            Self::Codex,
            Self::Gemini,
            Self::Copilot,
            Self::Qwen,
            Self::Cursor,
            Self::Amp,
            Self::DeepSeek,
        ]
    }

    /// Parse agent from a name or alias (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "claude" | "claude-code" => Some(Self::Claude),
            "codex" => Some(Self::Codex),
            "gemini" => Some(Self::Gemini),
            "copilot" => Some(Self::Copilot),
            "qwen" | "qwen-code" => Some(Self::Qwen),
            "cursor" | "cursor-agent" => Some(Self::Cursor),
            "amp" => Some(Self::Amp),
            "deepseek" => Some(Self::DeepSeek),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> &'static AgentDescriptor {
        match self {
            Self::Claude => &claude::DESCRIPTOR,
            Self::Codex => &codex::DESCRIPTOR,
            Self::Gemini => &gemini::DESCRIPTOR,
            Self::Copilot => &copilot::DESCRIPTOR,
            Self::Qwen => &qwen::DESCRIPTOR,
            Self::Cursor => &cursor::DESCRIPTOR,
            Self::Amp => &amp::DESCRIPTOR,
            Self::DeepSeek => &deepseek::DESCRIPTOR,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn display_name(&self) -> &'static str {
        self.descriptor().display_name
    }
}

impl std::str::FromStr for Agent {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| AgentError::UnknownAgent(s.to_string()))
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
