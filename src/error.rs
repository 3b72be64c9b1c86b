use miette::Diagnostic;
use thiserror::Error;

use crate::types::TransformError;

/// Main error type for tones operations
#[derive(Error, Diagnostic, Debug)]
pub enum TonesError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tones::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tones::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tones::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Transform failed: {source}")]
    #[diagnostic(code(tones::transform))]
    Transform {
        #[source]
        source: TransformError,
    },
}

impl From<TransformError> for TonesError {
    fn from(source: TransformError) -> Self {
        Self::Transform { source }
    }
}

pub type Result<T> = std::result::Result<T, TonesError>;
