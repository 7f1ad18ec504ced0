use thiserror::Error;

use crate::config::ConfigError;
use crate::ui::registration::SubmitError;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode form snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
