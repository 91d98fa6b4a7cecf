use crate::archive::{ArchiveDecompressor, Decompressor, DecompressorError};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::logger::{LogLevel, LogOutput, Logger, TracingLogger};
use crate::reachability::{HttpReachabilityChecker, ReachabilityChecker};
use crate::storage::{LocalStorage, Storage, StorageError};
use crate::Config;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;
use url::Url;

/// The CacheDownloader brings a prebuilt binary from the remote cache into the local one.
///
/// A download goes through the fetcher, then the destination directory is created, and finally
/// the archive is unpacked into it. Any failure along the way stops the sequence, is written to
/// the logger, and turns the whole call into `false`. Nothing is ever returned as an error.
///
/// Concurrent downloads into the same destination are not serialized here.
///
#[derive(Clone)]
pub struct CacheDownloader {
    logger: Arc<dyn Logger>,
    reachability_checker: Arc<dyn ReachabilityChecker>,
    fetcher: Arc<dyn Fetcher>,
    storage: Arc<dyn Storage>,
    decompressor: Arc<dyn Decompressor>,
}

impl CacheDownloader {
    pub fn new(
        logger: Arc<dyn Logger>,
        reachability_checker: Arc<dyn ReachabilityChecker>,
        fetcher: Arc<dyn Fetcher>,
        storage: Arc<dyn Storage>,
        decompressor: Arc<dyn Decompressor>,
    ) -> Self {
        Self {
            logger,
            reachability_checker,
            fetcher,
            storage,
            decompressor,
        }
    }

    /// Wires up the HTTP, local filesystem, and archive collaborators, logging through
    /// `tracing`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(TracingLogger::new()),
            Arc::new(HttpReachabilityChecker::new(config)),
            Arc::new(HttpFetcher::new(config)),
            Arc::new(LocalStorage::new()),
            Arc::new(ArchiveDecompressor::new(config)),
        )
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Whether the remote cache currently answers for this binary.
    pub async fn check_if_binary_is_reachable(&self, url: &Url) -> bool {
        self.reachability_checker.check_if_url_is_reachable(url).await
    }

    /// Downloads the archive at `url` and unpacks it into the `destination` directory.
    ///
    /// Returns `true` only if every step succeeded.
    #[instrument(name = "CacheDownloader::download_binary", skip(self))]
    pub async fn download_binary(&self, url: &Url, destination: &Path) -> bool {
        self.log(format!("Downloading {}", url));
        let archive = match self.fetcher.download(url).await {
            Ok(archive) => archive,
            Err(err) => {
                self.log(format!("Failed downloading {}:\n{}", url, err));
                return false;
            }
        };

        if let Err(err) = self.unzip(&archive, destination).await {
            self.log(format!("Failed unzipping to {}:\n{}", destination.display(), err));
            return false;
        }

        true
    }

    async fn unzip(&self, archive: &Path, destination: &Path) -> Result<(), UnzipError> {
        self.storage.create_dir(destination).await?;
        self.log(format!("Unzipping to {}", destination.display()));
        self.decompressor.unzip(archive, destination).await?;
        Ok(())
    }

    fn log(&self, text: String) {
        self.logger.log(&text, LogLevel::Compact, LogOutput::File);
    }
}

/// Preparing the destination and decompressing into it are reported as a single step.
#[derive(Error, Debug)]
enum UnzipError {
    #[error(transparent)]
    StorageError(StorageError),

    #[error(transparent)]
    DecompressorError(DecompressorError),
}

impl From<StorageError> for UnzipError {
    fn from(value: StorageError) -> Self {
        UnzipError::StorageError(value)
    }
}

impl From<DecompressorError> for UnzipError {
    fn from(value: DecompressorError) -> Self {
        UnzipError::DecompressorError(value)
    }
}
