//! Application error type.

use crate::theme::ThemeError;
use rps_core::{SessionError, SetupError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("Scripted play needs --name and --rounds")]
    MissingScriptedSetup,
}
