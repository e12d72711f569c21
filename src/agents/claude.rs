//! Claude AI agent configuration
//!
//! Claude Code is Anthropic's official CLI for Claude AI.
//! https://claude.ai/code

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "claude",
    display_name: "Claude",
    command_name: "claude",
    config_dir: ".claude",
    default_credential_env_var: "ANTHROPIC_API_KEY",
    fallback_credential_env_vars: &[],
    // Credentials in ~/.claude need an overlay; plugins still need write access
    requires_special_handling: true,
    config_dir_paths: &[(".claude", ".claude")],
};
