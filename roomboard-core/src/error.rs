//! Error types for roomboard operations.

use thiserror::Error;

use crate::validate::ValidationErrors;

/// Errors that can occur in roomboard operations.
#[derive(Error, Debug)]
pub enum RoomBoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for roomboard operations.
pub type RoomBoardResult<T> = Result<T, RoomBoardError>;
