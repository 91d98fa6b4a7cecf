use crate::events::EventChannel;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::*;

/// Name of the directory under the platform cache dir where binaries are kept.
pub const CACHE_DIR_NAME: &str = "bincache";

/// A collection of flags and options that affect how binaries are fetched from the remote cache.
///
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(error = "ConfigError"))]
pub struct Config {
    /// Never access the network. Reachability checks answer `false` and downloads fail.
    #[builder(default = "self.default_offline()")]
    offline: bool,

    /// The root of the local binary cache.
    #[builder(setter(into), default = "self.default_cache_root()")]
    cache_root: PathBuf,

    /// Where raw archives land while they wait to be unpacked.
    #[builder(setter(into), default = "self.default_download_root()")]
    download_root: PathBuf,

    /// Upper bound for every request made by the default HTTP client.
    #[builder(setter(strip_option), default = "None")]
    request_timeout: Option<Duration>,

    /// The HTTP Client to be used across the crate.
    /// NOTE: this is safe to clone since it is really an [Arc] to a client pool.
    #[builder(default = "self.default_http_client()?")]
    http_client: reqwest::Client,

    /// The Event Channel that download and log events are sent to.
    #[builder(default = "self.default_event_channel()")]
    event_channel: Arc<EventChannel>,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build().unwrap()
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn offline(&self) -> bool {
        self.offline
    }

    pub fn cache_root(&self) -> &PathBuf {
        &self.cache_root
    }

    pub fn download_root(&self) -> &PathBuf {
        &self.download_root
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn event_channel(&self) -> Arc<EventChannel> {
        self.event_channel.clone()
    }
}

impl ConfigBuilder {
    fn default_offline(&self) -> bool {
        false
    }

    fn default_cache_root(&self) -> PathBuf {
        directories::ProjectDirs::from("", "", CACHE_DIR_NAME)
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join(CACHE_DIR_NAME))
    }

    fn default_download_root(&self) -> PathBuf {
        std::env::temp_dir().join(CACHE_DIR_NAME)
    }

    fn default_http_client(&self) -> Result<reqwest::Client, ConfigError> {
        // Archives are stored exactly as served, even under `Content-Encoding: gzip`.
        let mut builder = reqwest::Client::builder().no_gzip();
        if let Some(Some(timeout)) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(ConfigError::HttpClientError)
    }

    fn default_event_channel(&self) -> Arc<EventChannel> {
        EventChannel::new().into()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not build the HTTP client: {0}")]
    HttpClientError(reqwest::Error),

    #[error("Attempted to build a Config struct while missing fields: {0:?}")]
    BuilderError(derive_builder::UninitializedFieldError),
}

impl From<derive_builder::UninitializedFieldError> for ConfigError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::BuilderError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_root_defaults_to_the_system_temp_dir() {
        let config = Config::builder()
            .cache_root("/tmp/bincache-test")
            .build()
            .unwrap();

        assert_eq!(
            config.download_root(),
            &std::env::temp_dir().join(CACHE_DIR_NAME)
        );
        assert!(!config.download_root().starts_with(config.cache_root()));
    }

    #[test]
    fn explicit_download_root_wins_over_the_default() {
        let config = Config::builder()
            .cache_root("/tmp/bincache-test")
            .download_root("/var/tmp/downloads")
            .build()
            .unwrap();

        assert_eq!(config.download_root(), &PathBuf::from("/var/tmp/downloads"));
    }

    #[test]
    fn is_online_by_default() {
        let config = Config::default();
        assert!(!config.offline());
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn keeps_the_request_timeout() {
        let config = Config::builder()
            .request_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }
}
