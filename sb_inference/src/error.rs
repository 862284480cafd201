use serde_json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Artifact could not be found in the path: {0}")]
    ArtifactPathNotFound(String),

    #[error("Invalid encoder: {0}")]
    InvalidEncoder(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Artifacts do not match the request schema: {0}")]
    SchemaMismatch(String),

    #[error("Column '{0}' is not known by the encoder")]
    UnknownColumn(String),

    #[error("Unknown category '{category}' in column '{column}'")]
    UnknownCategory { column: String, category: String },

    #[error("Feature count mismatch: expected {expected}, found {found}")]
    FeatureCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
