//! DeepSeek CLI agent configuration

use super::AgentDescriptor;

pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "deepseek",
    display_name: "DeepSeek",
    command_name: "deepseek",
    config_dir: ".deepseek",
    default_credential_env_var: "DEEPSEEK_API_KEY",
    fallback_credential_env_vars: &[],
    requires_special_handling: false,
    config_dir_paths: &[(".deepseek", ".deepseek")],
};
