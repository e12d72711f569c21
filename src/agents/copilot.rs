//! GitHub Copilot CLI agent configuration
//!
//! GitHub Copilot CLI is GitHub's AI pair programmer for the terminal.
//! It authenticates with a GitHub token rather than a dedicated API key.
//! https://docs.github.com/en/copilot/github-copilot-in-the-cli

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "copilot",
    display_name: "GitHub Copilot",
    command_name: "copilot",
    config_dir: ".copilot",
    default_credential_env_var: "GH_TOKEN",
    fallback_credential_env_vars: &["GITHUB_TOKEN"],
    requires_special_handling: false,
    config_dir_paths: &[(".copilot", ".copilot")],
};
