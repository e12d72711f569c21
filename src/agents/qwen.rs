//! Qwen Code agent configuration

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "qwen",
    display_name: "Qwen Code",
    command_name: "qwen",
    config_dir: ".qwen",
    default_credential_env_var: "QWEN_API_KEY",
    fallback_credential_env_vars: &[],
    requires_special_handling: false,
    config_dir_paths: &[(".qwen", ".qwen")],
};
