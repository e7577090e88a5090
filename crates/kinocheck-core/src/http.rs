//! HTTP client for fetching API replies
//!
//! A thin wrapper over reqwest: GET a path under the configured host,
//! require a success status, and decode the body as JSON. One request at
//! a time; retries and backoff are deliberately out of scope.

use crate::error::{Error, Result};
use crate::runner::ReplySource;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// HTTP client bound to one API host
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    host: String,
}

impl ApiClient {
    /// Create a client for the given host, e.g. `http://localhost:8000`.
    pub fn new(host: &str, config: ClientConfig) -> Result<Self> {
        Url::parse(host).map_err(|e| Error::Http {
            message: format!("invalid host URL '{host}': {e}"),
            status_code: None,
            source: Some(anyhow::Error::new(e)),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                let message = format!("failed to build HTTP client: {e}");
                Error::Http {
                    message,
                    status_code: None,
                    source: Some(anyhow::Error::new(e)),
                }
            })?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with the default configuration.
    pub fn with_default_config(host: &str) -> Result<Self> {
        Self::new(host, ClientConfig::default())
    }

    /// The host this client is bound to, without a trailing slash.
    pub fn host(&self) -> &str {
        &self.host
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.host, path);
        info!(%url, "fetching API reply");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let message = format!("GET {url} failed: {e}");
            let status_code = e.status().map(|s| s.as_u16());
            Error::Http {
                message,
                status_code,
                source: Some(anyhow::Error::new(e)),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                message: format!("GET {url} returned {status}"),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| {
            let message = format!("failed to read reply body from {url}: {e}");
            Error::Http {
                message,
                status_code: Some(status.as_u16()),
                source: Some(anyhow::Error::new(e)),
            }
        })?;

        debug!(bytes = body.len(), "decoding reply body");
        serde_json::from_str(&body).map_err(|e| Error::Json {
            message: format!("reply from {url} is not valid JSON"),
            source: e,
        })
    }
}

impl ReplySource for ApiClient {
    fn fetch_reply(&self, path: &str) -> impl Future<Output = Result<Value>> + Send {
        self.get_json(path)
    }
}
