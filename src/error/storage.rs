use std::path::PathBuf;
use thiserror::Error;

/// Failures of the persisted cache store. Fatal for the request that hit
/// them; the core does not retry.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read cache entry '{path}': {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write cache entry '{path}': {source}")]
    WriteEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode cache entry '{path}': {message}")]
    EncodeEntry { path: PathBuf, message: String },
}

impl StorageError {
    pub fn create_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn read_entry(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadEntry {
            path: path.into(),
            source,
        }
    }

    pub fn write_entry(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteEntry {
            path: path.into(),
            source,
        }
    }

    pub fn encode_entry(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::EncodeEntry {
            path: path.into(),
            message: message.into(),
        }
    }
}
