//! Bracket client that dispatches URLs to the owning provider.

use crate::error::{BracketError, FetchError, Result};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::providers::{ChallongeProvider, Provider, SmashGgProvider};
use bracket_core::{AppConfig, Bracket, ChallongeConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetches a bracket from whichever provider owns its URL.
///
/// Providers are tried in a fixed order (Challonge, then smash.gg) and the
/// first one that recognizes the URL handles it. The client holds no mutable
/// state, so one instance can serve concurrent fetches.
pub struct BracketClient {
    providers: Vec<Provider>,
    fetcher: Arc<dyn Fetcher>,
}

impl BracketClient {
    /// Create a client with an HTTP fetcher built from `config`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &AppConfig) -> std::result::Result<Self, FetchError> {
        let fetcher = HttpFetcher::with_config(&config.http)?;
        Ok(Self::with_fetcher(&config.challonge, Arc::new(fetcher)))
    }

    /// Create a client that sends requests through `fetcher`.
    #[must_use]
    pub fn with_fetcher(challonge: &ChallongeConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        if !challonge.has_credentials() {
            debug!("No Challonge credentials configured, requests will be anonymous");
        }

        Self {
            providers: vec![
                Provider::Challonge(ChallongeProvider::from_config(challonge)),
                Provider::SmashGg(SmashGgProvider::new()),
            ],
            fetcher,
        }
    }

    /// Registered providers in priority order.
    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// The provider that owns `url`, if any.
    #[must_use]
    pub fn provider_for(&self, url: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.recognizes(url))
    }

    /// Fetch the bracket behind `url` and convert it to the canonical model.
    ///
    /// # Errors
    /// - [`BracketError::UnsupportedProviderUrl`] if no provider recognizes the
    ///   URL; the fetcher is never called in that case
    /// - [`BracketError::InvalidUrl`] if the URL names no bracket
    /// - [`BracketError::Transport`] if the fetcher fails
    /// - [`BracketError::Decode`] if the response does not match the schema
    pub async fn fetch_bracket(&self, url: &str) -> Result<Bracket> {
        let provider = self
            .provider_for(url)
            .ok_or_else(|| BracketError::UnsupportedProviderUrl {
                url: url.to_string(),
            })?;
        debug!("Fetching {} bracket {}", provider.id(), url);

        let request = provider.build_request(url)?;
        let body = self
            .fetcher
            .fetch(&request)
            .await
            .map_err(|source| BracketError::Transport {
                provider: provider.id().to_string(),
                source,
            })?;

        let bracket = provider.normalize(&body, url)?;

        let unresolved = bracket.unresolved_player_ids();
        if !unresolved.is_empty() {
            warn!(
                "{} bracket references players outside its participant list: {:?}",
                provider.id(),
                unresolved
            );
        }
        debug!(
            "Fetched {} players and {} matches from {}",
            bracket.players.len(),
            bracket.matches.len(),
            provider.id()
        );

        Ok(bracket)
    }
}
