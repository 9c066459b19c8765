//! Error types for the loxc driver.
//!
//! Lexical errors are not in here: they are diagnostics collected by the
//! [`Handler`](loxc_util::Handler). These are the failures that stop a run.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a malformed command line.
pub const EXIT_USAGE: i32 = 64;

/// Exit status for input data errors (lexical errors in the script).
pub const EXIT_DATA_ERR: i32 = 65;

/// Exit status for I/O failures.
pub const EXIT_IO_ERR: i32 = 74;

/// Exit status for internal failures.
pub const EXIT_SOFTWARE: i32 = 70;

/// Exit status for an unreadable or invalid configuration file.
pub const EXIT_CONFIG: i32 = 78;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The script could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    ReadScript {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing output or reading the prompt failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the token stream failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Config(_) => EXIT_CONFIG,
            DriverError::ReadScript { .. } | DriverError::Io(_) => EXIT_IO_ERR,
            DriverError::Json(_) | DriverError::Logging(_) => EXIT_SOFTWARE,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
