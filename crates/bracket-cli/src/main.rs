//! Bracket command line tool.
//!
//! Fetches one tournament bracket and prints it to stdout as JSON. Logs go to
//! stderr so the output can be piped.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use bracket_core::{AppConfig, Bracket};
use bracket_providers::{BracketClient, BracketError};
use clap::Parser;
use tracing::{info, warn};

/// Print a Challonge or smash.gg bracket as normalized JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Bracket URL, e.g. http://challonge.com/xyfuz5c3
    #[arg(index = 1, value_name = "URL", required_unless_present = "init_config")]
    url: Option<String>,

    /// Read configuration from this file instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Write a default configuration file (at --config or the platform
    /// default) and exit
    #[arg(long)]
    init_config: bool,
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bracket=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = path else {
        return AppConfig::load_with_env().context("failed to load configuration");
    };

    let mut config = AppConfig::load_from(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    config
        .apply_overrides(|key| std::env::var(key).ok())
        .context("invalid configuration override")?;
    Ok(config)
}

/// Write a default configuration file, refusing to replace an existing one.
fn init_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => AppConfig::config_path().context("failed to locate configuration directory")?,
    };
    if target.exists() {
        anyhow::bail!("configuration already exists at {}", target.display());
    }

    AppConfig::default()
        .save_to(&target)
        .with_context(|| format!("failed to write configuration to {}", target.display()))?;
    Ok(target)
}

fn render(bracket: &Bracket, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(bracket)
    } else {
        serde_json::to_string_pretty(bracket)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    info!("Starting bracket v{}", env!("CARGO_PKG_VERSION"));

    if args.init_config {
        let path = init_config(args.config.as_deref())?;
        info!("Wrote default configuration to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }
    let Some(url) = args.url.as_deref() else {
        anyhow::bail!("a bracket URL is required");
    };

    let config = load_config(args.config.as_deref())?;
    let client = BracketClient::new(&config).context("failed to create HTTP client")?;

    let bracket = match client.fetch_bracket(url).await {
        Ok(bracket) => bracket,
        Err(err @ BracketError::UnsupportedProviderUrl { .. }) => {
            warn!("{err}");
            return Ok(ExitCode::from(2));
        }
        Err(err) => return Err(err).context(format!("failed to fetch {url}")),
    };

    println!("{}", render(&bracket, args.compact)?);
    Ok(ExitCode::SUCCESS)
}
