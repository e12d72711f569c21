//! Gemini CLI agent configuration
//!
//! Gemini CLI is Google's AI terminal assistant.
//! https://ai.google.dev

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "gemini",
    display_name: "Gemini",
    command_name: "gemini",
    config_dir: ".gemini",
    default_credential_env_var: "GEMINI_API_KEY",
    fallback_credential_env_vars: &["GOOGLE_API_KEY"],
    requires_special_handling: false,
    config_dir_paths: &[(".gemini", ".gemini")],
};
