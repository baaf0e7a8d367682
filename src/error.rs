//! Session-level error type

use crate::config::ConfigError;
use crate::llm::{LlmError, RegistryError};
use crate::prompt::PromptError;
use crate::state_machine::TransitionError;
use thiserror::Error;

/// Anything that ends a bot session early
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("Model call failed: {0}")]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
