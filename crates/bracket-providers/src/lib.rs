//! Bracket Providers - fetch tournament brackets from hosting services.
//!
//! This crate recognizes bracket URLs from supported hosting services, builds
//! the matching API request, and converts each service's payload into the
//! provider-independent model from `bracket-core`.
//!
//! # Features
//!
//! - **Provider Detection**: URLs are matched against each provider in a fixed order
//! - **Schema Reconciliation**: Challonge and smash.gg payloads become one `Bracket`
//! - **Derived Fields**: tournament state and time bounds inferred when missing
//! - **Bye Filtering**: padding sets generated by smash.gg are dropped
//! - **Pluggable Transport**: requests go through the [`Fetcher`] trait
//!
//! # Example
//!
//! ```rust,no_run
//! use bracket_core::AppConfig;
//! use bracket_providers::BracketClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load_with_env()?;
//! let client = BracketClient::new(&config)?;
//!
//! let bracket = client.fetch_bracket("http://challonge.com/xyfuz5c3").await?;
//! println!("{} has {} matches", bracket.name, bracket.matches.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! URL → BracketClient picks Provider → build_request → Fetcher
//!                                                        ↓
//!                    Bracket ← convert ← decode ← response bytes
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod fetcher;
pub mod provider;
pub mod providers;

// Re-export commonly used types
pub use client::BracketClient;
pub use error::{BracketError, FetchError, Result};
pub use fetcher::{Fetcher, HttpFetcher};
pub use provider::{BasicAuth, BracketProvider, Method, ProviderRequest};
pub use providers::{ChallongeProvider, Provider, SmashGgProvider};
