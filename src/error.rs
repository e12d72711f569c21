use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Unknown agent '{0}'. Supported: claude, codex, gemini, copilot, qwen, cursor, amp, deepseek")]
    UnknownAgent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;
