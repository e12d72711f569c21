//! Registry of AI coding agents and the container mounts they need.
//!
//! An orchestrator provisioning a sandboxed dev container asks this crate
//! which host config directories to bind in for each agent and which
//! credential environment variables to proxy. Nothing here touches the
//! filesystem or the process environment except [`MountConfig::load`].

pub mod agents;
pub mod config;
pub mod error;

pub use agents::{
    find_agent, get_all_mounts, get_mounts, get_mounts_with, list_agents,
    list_default_credential_env_vars, select_credential_env, Agent, AgentDescriptor,
};
pub use config::{Mount, MountConfig, DEFAULT_CONTAINER_HOME};
pub use error::{AgentError, Result};
