//! Bracket Core - Provider-independent tournament bracket model.
//!
//! This crate holds the canonical data types every bracket provider converts
//! into, the shared error type and the TOML-based configuration used by the
//! fetching layer and the command line tool.
//!
//! # Modules
//!
//! - [`types`] - `Bracket`, `Player`, `Match`, `State` and `Timestamp`
//! - [`error`] - Core error types using thiserror
//! - [`config`] - TOML configuration with XDG paths and environment overrides
//!
//! # Example
//!
//! ```rust
//! use bracket_core::{Bracket, State};
//!
//! let bracket = Bracket::new("https://challonge.com/xyfuz5c3");
//! assert!(bracket.players.is_empty());
//! assert_eq!(State::default(), State::Pending);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, ChallongeConfig, HttpConfig};
pub use error::{ConfigError, ConfigResult, CoreError, Result};
pub use types::{Bracket, Match, Player, State, Timestamp};
