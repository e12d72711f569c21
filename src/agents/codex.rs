//! Codex CLI agent configuration
//!
//! Codex CLI is OpenAI's Codex CLI for code generation.
//! Note: Supports API key authentication for programmatic access.

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "codex",
    display_name: "Codex",
    command_name: "codex",
    config_dir: ".codex",
    default_credential_env_var: "OPENAI_API_KEY",
    fallback_credential_env_vars: &[],
    requires_special_handling: false,
    config_dir_paths: &[(".codex", ".codex")],
};
