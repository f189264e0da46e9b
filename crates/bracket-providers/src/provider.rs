//! Core bracket provider trait and request types.

use crate::error::{BracketError, Result};
use bracket_core::Bracket;
use serde::de::DeserializeOwned;
use std::fmt;

/// Trait for bracket hosting services.
///
/// Each provider recognizes its own URLs, knows how to build the API request
/// for one of them, decodes the response into its own intermediate schema and
/// converts that schema into the canonical [`Bracket`].
pub trait BracketProvider: Send + Sync {
    /// Provider-specific decoded response.
    type Payload: DeserializeOwned;

    /// Get the unique identifier for this provider.
    fn provider_id(&self) -> &'static str;

    /// Whether this provider owns the given bracket URL.
    ///
    /// A permissive substring check; provider subdomains vary too much for
    /// anything stricter.
    fn recognizes(&self, url: &str) -> bool;

    /// Build the API request that retrieves the bracket behind `url`.
    ///
    /// # Errors
    /// Returns [`BracketError::InvalidUrl`] if the URL names no bracket.
    fn build_request(&self, url: &str) -> Result<ProviderRequest>;

    /// Decode a raw response body.
    ///
    /// # Errors
    /// Returns [`BracketError::Decode`] if the body does not match the schema.
    fn decode(&self, body: &[u8]) -> Result<Self::Payload> {
        serde_json::from_slice(body).map_err(|source| BracketError::Decode {
            provider: self.provider_id().to_string(),
            source,
        })
    }

    /// Convert a decoded response into the canonical model.
    ///
    /// `source_url` is the URL the caller asked for, used when the provider
    /// does not report a canonical one.
    fn convert(&self, payload: Self::Payload, source_url: &str) -> Bracket;

    /// Decode and convert in one step.
    ///
    /// # Errors
    /// Returns [`BracketError::Decode`] if the body does not match the schema.
    fn normalize(&self, body: &[u8], source_url: &str) -> Result<Bracket> {
        let payload = self.decode(body)?;
        Ok(self.convert(payload, source_url))
    }
}

/// HTTP method of a provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
        }
    }
}

/// HTTP basic authentication credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// Account name
    pub username: String,
    /// Password or API key
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A fully-formed request for a [`Fetcher`](crate::fetcher::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute API URL
    pub url: String,
    /// Optional basic auth credentials
    pub basic_auth: Option<BasicAuth>,
}

impl ProviderRequest {
    /// Create an unauthenticated GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            basic_auth: None,
        }
    }

    /// Attach basic auth credentials.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}
