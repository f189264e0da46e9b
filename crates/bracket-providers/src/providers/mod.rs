//! Bracket provider implementations.

pub mod challonge;
pub mod common;
pub mod smashgg;

pub use challonge::ChallongeProvider;
pub use smashgg::SmashGgProvider;

use crate::error::Result;
use crate::provider::{BracketProvider, ProviderRequest};
use bracket_core::Bracket;

/// The closed set of supported providers.
///
/// Adding a provider means adding a variant here and registering it in
/// [`BracketClient`](crate::client::BracketClient).
pub enum Provider {
    /// challonge.com, including organization subdomains
    Challonge(ChallongeProvider),
    /// smash.gg phase groups
    SmashGg(SmashGgProvider),
}

impl Provider {
    /// Get the unique identifier of the wrapped provider.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Challonge(p) => p.provider_id(),
            Self::SmashGg(p) => p.provider_id(),
        }
    }

    /// Whether the wrapped provider owns `url`.
    #[must_use]
    pub fn recognizes(&self, url: &str) -> bool {
        match self {
            Self::Challonge(p) => p.recognizes(url),
            Self::SmashGg(p) => p.recognizes(url),
        }
    }

    /// Build the API request for `url`.
    pub fn build_request(&self, url: &str) -> Result<ProviderRequest> {
        match self {
            Self::Challonge(p) => p.build_request(url),
            Self::SmashGg(p) => p.build_request(url),
        }
    }

    /// Decode a response body and convert it into a [`Bracket`].
    pub fn normalize(&self, body: &[u8], source_url: &str) -> Result<Bracket> {
        match self {
            Self::Challonge(p) => p.normalize(body, source_url),
            Self::SmashGg(p) => p.normalize(body, source_url),
        }
    }
}
