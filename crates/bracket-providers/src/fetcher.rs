//! Transport seam between the adapters and the network.
//!
//! Adapters only build [`ProviderRequest`]s and consume response bytes; the
//! [`Fetcher`] executes the request. Retries and cancellation, if any, belong
//! to the fetcher implementation.

use crate::error::FetchError;
use crate::provider::{Method, ProviderRequest};
use async_trait::async_trait;
use bracket_core::HttpConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Executes one fully-formed provider request.
///
/// Implementations must be thread-safe (Send + Sync) so a single client can
/// serve concurrent fetches.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform the request and return the raw response body.
    ///
    /// # Errors
    /// Returns error on network failure or a non-success status.
    async fn fetch(&self, request: &ProviderRequest) -> Result<Vec<u8>, FetchError>;
}

/// reqwest-backed [`Fetcher`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with default HTTP settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&HttpConfig::default())
    }

    /// Create a fetcher with the given timeout and user agent.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &ProviderRequest) -> Result<Vec<u8>, FetchError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
        };
        if let Some(auth) = &request.basic_auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());
            warn!("{} returned HTTP {}", request.url, status.as_u16());
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
