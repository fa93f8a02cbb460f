//! Skycast - look up current weather by city, with an offline cache
//!
//! Fetches current conditions from the weather API when online and serves
//! cached records from a persistent local store when offline.

mod cli;
mod clock;
mod data;
mod lookup;
mod store;

use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cli::{Cli, StartupConfig};
use clock::SystemClock;
use data::{WeatherClient, WeatherReport};
use lookup::{LookupOutcome, LookupService};
use store::{DiskStore, MemoryStore, WeatherStore};

/// Formats a weather report for terminal output.
fn render_report(report: &WeatherReport) -> String {
    format!(
        "{}, {}\n\
         Temperature: {}°C\n\
         Feels like: {}°C\n\
         Sunrise: {} — Sunset: {}\n\
         Weather: {}\n\
         Wind: {} m/s, {}",
        report.city_name,
        report.state_code,
        report.temp,
        report.app_temp,
        report.sunrise,
        report.sunset,
        report.weather.description,
        report.wind_spd,
        report.wind_cdir_full,
    )
}

/// Builds the weather store, preferring the XDG cache directory.
///
/// Falls back to an in-memory store when no cache directory can be resolved,
/// so the network path stays usable for the session.
fn build_store(config: &StartupConfig) -> Arc<dyn WeatherStore> {
    if let Some(dir) = &config.cache_dir {
        return Arc::new(DiskStore::with_dir(dir.clone()));
    }
    match DiskStore::new() {
        Some(store) => Arc::new(store),
        None => {
            warn!("no cache directory available; lookups will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    let mut client = WeatherClient::new(config.api_key.clone());
    if let Some(url) = &config.api_url {
        client = client.with_base_url(url.clone());
    }

    let service = LookupService::new(
        Arc::new(client),
        build_store(&config),
        Arc::new(SystemClock),
    );

    match service.resolve_weather(&config.city, config.online).await? {
        LookupOutcome::Fresh(report) | LookupOutcome::Cached(report) => {
            println!("{}", render_report(&report));
        }
        LookupOutcome::NoOfflineData => {
            println!("Offline and no cached data available for {}.", config.city);
        }
    }

    Ok(())
}
