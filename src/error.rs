//! Error types for contentkit
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for contentkit operations
pub type ContentKitResult<T> = Result<T, ContentKitError>;

/// Main error type for contentkit operations
#[derive(Error, Debug)]
pub enum ContentKitError {
    /// Configuration file could not be read or parsed
    #[error("cannot load configuration {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Requested icon profile is neither built in nor configured
    #[error("unknown icon profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },

    /// Icon profile is structurally unusable
    #[error("icon profile '{name}' is invalid: {message}")]
    InvalidProfile { name: String, message: String },
}
