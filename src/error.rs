//! Error handling for result sheet processing.
//!
//! The extraction core itself never fails: bad lines are dropped. These
//! errors cover the surrounding plumbing: locating documents, reading them,
//! and writing the merged record set.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document not found at path: {path}")]
    DocumentNotFound { path: PathBuf },

    #[error("No result documents found in: {inputs}")]
    NoDocuments { inputs: String },

    #[error("Invalid input pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Processing failed for document: {path} - {reason}")]
    DocumentFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SwimError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a per-document failure
    pub fn document_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DocumentFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SwimError>;
