//! Error handling module for the monkeyt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the monkeyt CLI application.
#[derive(Error, Debug)]
pub enum MonkeytError {
    /// Configuration could not be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source or output file could not be read or written.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more sources contain lexical errors.
    #[error("{errors} lexical error(s) in {files} file(s)")]
    Lex {
        /// Number of files with at least one error
        files: usize,
        /// Total number of errors
        errors: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MonkeytError.
pub type Result<T> = std::result::Result<T, MonkeytError>;
