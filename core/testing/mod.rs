//! Recording test doubles for every collaborator of the [crate::CacheDownloader].
//!

use async_trait::async_trait;
use crate::archive::{Decompressor, DecompressorError};
use crate::fetcher::{Fetcher, FetcherError};
use crate::logger::{LogEntry, LogLevel, LogOutput, Logger};
use crate::reachability::ReachabilityChecker;
use crate::storage::{Storage, StorageError};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use url::Url;

/// The description every failing double reports.
pub(crate) const TEST_ERROR: &str = "test";

#[derive(Default)]
pub(crate) struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub(crate) fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, text: &str, level: LogLevel, output: LogOutput) {
        self.entries
            .lock()
            .unwrap()
            .push(LogEntry::new(text, level, output));
    }
}

#[derive(Default)]
pub(crate) struct StubReachabilityChecker {
    pub(crate) answer: bool,
    calls: Mutex<Vec<Url>>,
}

impl StubReachabilityChecker {
    pub(crate) fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReachabilityChecker for StubReachabilityChecker {
    async fn check_if_url_is_reachable(&self, url: &Url) -> bool {
        self.calls.lock().unwrap().push(url.clone());
        self.answer
    }
}

/// Hands out `download_path`, or fails when there is none.
#[derive(Default)]
pub(crate) struct StubFetcher {
    download_path: Option<PathBuf>,
    calls: Mutex<Vec<Url>>,
}

impl StubFetcher {
    pub(crate) fn succeeding<P: Into<PathBuf>>(download_path: P) -> Self {
        Self {
            download_path: Some(download_path.into()),
            ..Default::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn download(&self, url: &Url) -> Result<PathBuf, FetcherError> {
        self.calls.lock().unwrap().push(url.clone());
        self.download_path
            .clone()
            .ok_or_else(|| anyhow::anyhow!(TEST_ERROR).into())
    }
}

#[derive(Default)]
pub(crate) struct StubStorage {
    fail: bool,
    calls: Mutex<Vec<PathBuf>>,
}

impl StubStorage {
    pub(crate) fn succeeding() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for StubStorage {
    async fn create_dir(&self, path: &Path) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        if self.fail {
            return Err(anyhow::anyhow!(TEST_ERROR).into());
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct StubDecompressor {
    fail: bool,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl StubDecompressor {
    pub(crate) fn succeeding() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Decompressor for StubDecompressor {
    async fn unzip(&self, archive: &Path, destination: &Path) -> Result<(), DecompressorError> {
        self.calls
            .lock()
            .unwrap()
            .push((archive.to_path_buf(), destination.to_path_buf()));
        if self.fail {
            return Err(anyhow::anyhow!(TEST_ERROR).into());
        }
        Ok(())
    }
}
