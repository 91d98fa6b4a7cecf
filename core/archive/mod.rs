mod decompressor;
pub use decompressor::*;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Expands a downloaded archive into a destination directory.
///
#[async_trait]
pub trait Decompressor: Send + Sync {
    async fn unzip(&self, archive: &Path, destination: &Path) -> Result<(), DecompressorError>;
}

#[derive(Error, Debug)]
pub enum DecompressorError {
    #[error("The archive at {path:?} is empty")]
    EmptyArchive { path: PathBuf },

    #[error("Refusing to extract {entry:?}: it would land outside of {destination:?}")]
    UnsafeEntry { entry: String, destination: PathBuf },

    #[error(transparent)]
    ZipError(async_zip::error::ZipError),

    #[error(transparent)]
    IoError(std::io::Error),

    #[error(transparent)]
    JoinError(tokio::task::JoinError),

    #[error(transparent)]
    Unknown(anyhow::Error),
}

impl From<async_zip::error::ZipError> for DecompressorError {
    fn from(value: async_zip::error::ZipError) -> Self {
        DecompressorError::ZipError(value)
    }
}

impl From<std::io::Error> for DecompressorError {
    fn from(value: std::io::Error) -> Self {
        DecompressorError::IoError(value)
    }
}

impl From<tokio::task::JoinError> for DecompressorError {
    fn from(value: tokio::task::JoinError) -> Self {
        DecompressorError::JoinError(value)
    }
}

impl From<anyhow::Error> for DecompressorError {
    fn from(value: anyhow::Error) -> Self {
        DecompressorError::Unknown(value)
    }
}
