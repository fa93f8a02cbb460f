//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --offline flag that forces lookups to be served from the local cache.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The city argument was empty or whitespace-only
    #[error("City name must not be empty")]
    EmptyCity,
}

/// Skycast - look up current weather by city, with an offline cache
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Current weather by city, served from the network or the offline cache")]
#[command(version)]
pub struct Cli {
    /// City to look up (e.g. "London")
    pub city: String,

    /// Serve from the offline cache instead of the network
    #[arg(long)]
    pub offline: bool,

    /// API key for the weather endpoint
    #[arg(long, env = "SKYCAST_API_KEY")]
    pub api_key: String,

    /// Override the weather endpoint base URL (e.g. a local proxy)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the cache directory for stored weather records
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Trimmed city name to look up
    pub city: String,
    /// Whether the lookup should take the online (network) path
    pub online: bool,
    /// API key for the weather endpoint
    pub api_key: String,
    /// Endpoint base URL override, if specified
    pub api_url: Option<String>,
    /// Weather store directory override, if specified
    pub cache_dir: Option<PathBuf>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with a non-empty, trimmed city
    /// * `Err(CliError::EmptyCity)` if the city is blank
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let city = cli.city.trim();
        if city.is_empty() {
            return Err(CliError::EmptyCity);
        }

        Ok(StartupConfig {
            city: city.to_string(),
            online: !cli.offline,
            api_key: cli.api_key.clone(),
            api_url: cli.api_url.clone(),
            cache_dir: cli.cache_dir.clone(),
        })
    }
}
