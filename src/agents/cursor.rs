//! Cursor Agent configuration
//!
//! Cursor Agent is Cursor's terminal AI assistant.
//! https://cursor.sh

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "cursor",
    display_name: "Cursor",
    // Installed as cursor-agent, not cursor (the editor)
    command_name: "cursor-agent",
    config_dir: ".cursor",
    default_credential_env_var: "CURSOR_API_KEY",
    fallback_credential_env_vars: &[],
    requires_special_handling: false,
    config_dir_paths: &[(".cursor", ".cursor")],
};
