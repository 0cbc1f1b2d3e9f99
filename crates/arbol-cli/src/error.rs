//! Error types for arbol-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Malformed JSON input
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        /// File being parsed
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Feature vector could not be parsed
    #[error("Invalid feature vector '{input}': {reason}")]
    InvalidFeatures {
        /// Raw argument
        input: String,
        /// What went wrong
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be rendered as JSON
    #[error("Failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Model error from the library
    #[error("Model error: {0}")]
    Model(#[from] arbol::ArbolError),
}

impl CliError {
    /// Numeric process status for this error
    pub(crate) fn status(&self) -> u8 {
        match self {
            Self::Model(_) => 1,
            Self::FileNotFound(_) => 3,
            Self::InvalidJson { .. } | Self::InvalidFeatures { .. } => 4,
            Self::Io(_) | Self::Serialize(_) => 7,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}
