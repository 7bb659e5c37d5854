//! Application error type.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The window could not be opened or updated.
    #[error("window error: {0}")]
    Window(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The hand source thread failed to start or panicked.
    #[error("hand source error: {0}")]
    HandSource(String),
}
