use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Home directory of the unprivileged user inside the dev container
pub const DEFAULT_CONTAINER_HOME: &str = "/home/vscode";

/// A host directory bound into the container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub host_path: PathBuf,
    pub container_path: PathBuf,
    pub read_only: bool,
}

impl Mount {
    /// Render as a `-v` argument for podman/docker (format: source:target[:ro])
    pub fn volume_arg(&self) -> String {
        if self.read_only {
            format!(
                "{}:{}:ro",
                self.host_path.display(),
                self.container_path.display()
            )
        } else {
            format!(
                "{}:{}",
                self.host_path.display(),
                self.container_path.display()
            )
        }
    }
}

/// Options applied when deriving agent mounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Home directory inside the container that agent config dirs are mounted under
    pub container_home: PathBuf,

    /// Mount every agent config directory read-only
    pub read_only: bool,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            container_home: PathBuf::from(DEFAULT_CONTAINER_HOME),
            read_only: false,
        }
    }
}

impl MountConfig {
    /// Load options from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AgentError::Config(format!(
                "Failed to read mount config {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AgentError::Config(format!(
                "Failed to parse mount config {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(
            "Loaded mount config from {}: container_home={}, read_only={}",
            path.display(),
            config.container_home.display(),
            config.read_only
        );
        Ok(config)
    }
}
