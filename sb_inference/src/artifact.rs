use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads a JSON artifact from disk.
pub fn from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ArtifactPathNotFound(path.display().to_string()),
        _ => Error::from(e),
    })?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    let artifact: T = serde_json::from_str(&data)?;
    Ok(artifact)
}
