use async_trait::async_trait;
use crate::Config;
use tracing::{debug, instrument};
use url::Url;

/// Answers whether a remote location currently responds, without downloading its body.
///
/// Implementations never fail: any fault is an unreachable answer.
///
#[async_trait]
pub trait ReachabilityChecker: Send + Sync {
    async fn check_if_url_is_reachable(&self, url: &Url) -> bool;
}

/// Probes a URL with a `HEAD` request. Only a successful status counts as reachable.
///
#[derive(Debug, Clone)]
pub struct HttpReachabilityChecker {
    client: reqwest::Client,
    offline: bool,
}

impl HttpReachabilityChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            client: config.http_client().clone(),
            offline: config.offline(),
        }
    }
}

#[async_trait]
impl ReachabilityChecker for HttpReachabilityChecker {
    #[instrument(name = "HttpReachabilityChecker::check_if_url_is_reachable", skip(self))]
    async fn check_if_url_is_reachable(&self, url: &Url) -> bool {
        if self.offline {
            return false;
        }

        match self.client.head(url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("{} is not reachable: {}", url, err);
                false
            }
        }
    }
}
