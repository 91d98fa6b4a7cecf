use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::instrument;

/// Access to the local filesystem where binaries are materialized.
///
#[async_trait]
pub trait Storage: Send + Sync {
    /// Creates a directory and all of its missing parents. Creating a directory that already
    /// exists succeeds.
    async fn create_dir(&self, path: &Path) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Storage for LocalStorage {
    #[instrument(name = "LocalStorage::create_dir", skip(self))]
    async fn create_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(path)
            .await
            .map_err(|err| StorageError::CouldNotCreateDir {
                path: path.to_path_buf(),
                err,
            })
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not create directory {path:?} due to: {err}")]
    CouldNotCreateDir { path: PathBuf, err: std::io::Error },

    #[error(transparent)]
    Unknown(anyhow::Error),
}

impl From<anyhow::Error> for StorageError {
    fn from(value: anyhow::Error) -> Self {
        StorageError::Unknown(value)
    }
}
