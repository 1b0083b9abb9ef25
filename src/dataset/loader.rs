//! Dataset loading
//!
//! Reads the JSON record array once at startup. Missing files and
//! malformed content are reported as distinct errors so the caller can
//! fail fast with a useful message.

use super::record::{Dataset, Record};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed dataset {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the dataset from a JSON file containing an array of records
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    debug!("Reading dataset from {}", path.display());

    let data = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let dataset = Dataset::from_json_str(&data).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

impl Dataset {
    /// Parse a dataset from an in-memory JSON array
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Dataset::new(records))
    }
}
