//! Amp agent configuration
//!
//! Amp is Sourcegraph's agentic coding CLI. It keeps its settings under
//! the XDG config directory instead of a dotdir in $HOME.
//! https://ampcode.com

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "amp",
    display_name: "Amp",
    command_name: "amp",
    config_dir: ".config/amp",
    default_credential_env_var: "AMP_API_KEY",
    fallback_credential_env_vars: &[],
    requires_special_handling: false,
    config_dir_paths: &[(".config/amp", ".config/amp")],
};
