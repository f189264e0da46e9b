//! Error types for bracket fetching.

use thiserror::Error;

/// Errors that can occur while fetching and normalizing a bracket.
#[derive(Error, Debug)]
pub enum BracketError {
    /// No registered provider recognizes the URL
    #[error("no provider recognizes bracket URL: {url}")]
    UnsupportedProviderUrl {
        /// The URL that was rejected
        url: String,
    },

    /// The URL belongs to a provider but does not name a bracket
    #[error("invalid {provider} bracket URL {url}: {reason}")]
    InvalidUrl {
        /// Provider name
        provider: String,
        /// The offending URL
        url: String,
        /// What is missing or malformed
        reason: String,
    },

    /// The fetcher failed to retrieve the provider response
    #[error("transport error ({provider}): {source}")]
    Transport {
        /// Provider name
        provider: String,
        /// Underlying fetch error
        #[source]
        source: FetchError,
    },

    /// The provider response does not match the expected schema
    #[error("failed to decode response from {provider}: {source}")]
    Decode {
        /// Provider name
        provider: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl BracketError {
    /// Whether this is the non-fatal "no provider" outcome rather than a failure.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedProviderUrl { .. })
    }
}

/// Errors raised by a [`Fetcher`](crate::fetcher::Fetcher).
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for bracket operations.
pub type Result<T> = std::result::Result<T, BracketError>;
