//! Error types for the command-line tool.

use std::path::PathBuf;

/// Errors that can occur while loading or printing forms.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The form declaration could not be decoded.
    #[error("Invalid form declaration in '{path}': {source}")]
    Declaration {
        /// Path of the declaration file.
        path: PathBuf,
        /// Underlying form error.
        source: uniforms_core::FormError,
    },

    /// The input file is not a JSON object.
    #[error("Invalid input values in '{path}': {source}")]
    Input {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// Encoding output failed.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Form error while producing output.
    #[error(transparent)]
    Form(#[from] uniforms_core::FormError),
}

/// Result type for command-line operations.
pub type Result<T> = std::result::Result<T, CliError>;
