//! Error types for hierarchy generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for beandoc operations
pub type BeanDocResult<T> = Result<T, BeanDocError>;

#[derive(Debug, Error)]
pub enum BeanDocError {
    /// IO error while reading inputs
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor or batch file is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config set lacks a mandatory option
    #[error("config set '{set}' is missing option '{option}'")]
    MissingOption { set: String, option: &'static str },

    /// An option value could not be interpreted
    #[error("invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },

    /// Supertype links loop back on themselves
    #[error("cyclic supertype chain: {}", .chain.join(" -> "))]
    CyclicHierarchy { chain: Vec<String> },

    /// The output artifact could not be opened or written
    #[error("cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BeanDocError {
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BeanDocError::Output {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_option(option: impl Into<String>, value: impl Into<String>) -> Self {
        BeanDocError::InvalidOption {
            option: option.into(),
            value: value.into(),
        }
    }
}
