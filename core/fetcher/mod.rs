use async_trait::async_trait;
use crate::events::event::DownloadEvent;
use crate::events::EventChannel;
use crate::Config;
use futures::{StreamExt, TryStreamExt};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};
use url::Url;

/// Downloads a remote resource to a temporary local path.
///
/// The returned path belongs to the fetcher: callers only read from it.
///
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn download(&self, url: &Url) -> Result<PathBuf, FetcherError>;
}

/// Streams a `GET` response body into a fresh `*.tmp` file under the download root.
///
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    download_root: PathBuf,
    offline: bool,
    event_channel: Arc<EventChannel>,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            client: config.http_client().clone(),
            download_root: config.download_root().to_path_buf(),
            offline: config.offline(),
            event_channel: config.event_channel(),
        }
    }

    async fn stream_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(PathBuf, String, u64), std::io::Error> {
        let mut byte_stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));

        fs::create_dir_all(&self.download_root).await?;

        let tempfile = tempfile::Builder::new()
            .suffix(".tmp")
            .tempfile_in(&self.download_root)?;
        let mut outfile = fs::File::from_std(tempfile.reopen()?);

        let mut s = Sha256::new();
        let mut total_size = 0;
        while let Some(chunk) = byte_stream.next().await {
            let mut chunk = chunk?;
            s.update(&chunk);
            total_size += chunk.len() as u64;
            outfile.write_all_buf(&mut chunk).await?;
        }
        outfile.flush().await?;

        let (_file, path) = tempfile.keep()?;
        let hash = format!("{:x}", s.finalize());

        Ok((path, hash, total_size))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(name = "HttpFetcher::download", skip(self))]
    async fn download(&self, url: &Url) -> Result<PathBuf, FetcherError> {
        if self.offline {
            return Err(FetcherError::Offline);
        }

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FetcherError::DownloadFailed {
                url: url.clone(),
                status: response.status(),
            });
        }

        self.event_channel.send(DownloadEvent::DownloadStarted { url: url.clone() });

        let (path, sha256, total_size) = self.stream_response(response).await?;
        debug!("downloaded {} bytes into {:?}", total_size, path);

        self.event_channel.send(DownloadEvent::DownloadCompleted {
            url: url.clone(),
            sha256,
            total_size,
        });

        Ok(path)
    }
}

#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("Could not download URL {url} due to: {status}")]
    DownloadFailed {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    RequestError(reqwest::Error),

    #[error(transparent)]
    IoError(std::io::Error),

    #[error("Can't download from the remote cache in offline mode.")]
    Offline,

    #[error(transparent)]
    Unknown(anyhow::Error),
}

impl From<reqwest::Error> for FetcherError {
    fn from(value: reqwest::Error) -> Self {
        FetcherError::RequestError(value)
    }
}

impl From<std::io::Error> for FetcherError {
    fn from(value: std::io::Error) -> Self {
        FetcherError::IoError(value)
    }
}

impl From<anyhow::Error> for FetcherError {
    fn from(value: anyhow::Error) -> Self {
        FetcherError::Unknown(value)
    }
}
