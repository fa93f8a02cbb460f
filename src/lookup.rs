//! Offline-aware weather lookup
//!
//! This is the core of the application: given a city name and the current
//! connectivity state, decide whether to serve from the local persistent
//! store or go to the network, and keep the store populated opportunistically
//! from successful fetches.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::data::{normalize_city, StoredReport, WeatherClient, WeatherError, WeatherReport};
use crate::store::{StoreError, WeatherStore};

/// Maximum age of a stored record before offline reads ignore it.
pub const FRESHNESS_WINDOW_MINUTES: i64 = 30;

/// Errors from a weather lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network request failed or the API returned a non-success status
    #[error("Network error: {0}")]
    Network(WeatherError),

    /// The API responded but had no entries for the city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Persistent store read failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The result of a successful lookup.
///
/// `NoOfflineData` is a valid empty result, not an error: offline with
/// nothing fresh to show is an expected state the caller renders as such.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Freshly fetched from the network
    Fresh(WeatherReport),
    /// Served from the local store within the freshness window
    Cached(WeatherReport),
    /// Offline and no sufficiently fresh record exists
    NoOfflineData,
}

/// Source of current weather conditions; the network-facing seam of the
/// lookup service, stubbed out in tests.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        WeatherClient::fetch_current(self, city).await
    }
}

/// Resolves weather lookups against the network and the offline store.
///
/// All collaborators are injected: connectivity is an explicit parameter and
/// the store and clock are constructor-bound, so the offline/online branch
/// and the freshness rule are testable without ambient state.
pub struct LookupService {
    source: Arc<dyn WeatherSource>,
    store: Arc<dyn WeatherStore>,
    clock: Arc<dyn Clock>,
}

impl LookupService {
    pub fn new(
        source: Arc<dyn WeatherSource>,
        store: Arc<dyn WeatherStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { source, store, clock }
    }

    /// Resolves a weather lookup for the given city.
    ///
    /// Offline: returns the stored record if one exists and is younger than
    /// the freshness window (strict less-than; a record exactly 30 minutes
    /// old is stale), otherwise `NoOfflineData`.
    ///
    /// Online: fetches from the API and persists the result under the
    /// normalized city key. Persistence is best-effort — a store write
    /// failure is logged but the freshly fetched data is still returned.
    ///
    /// The caller is expected to reject empty city names before calling.
    pub async fn resolve_weather(
        &self,
        city: &str,
        online: bool,
    ) -> Result<LookupOutcome, LookupError> {
        let key = normalize_city(city);

        if !online {
            info!(city = %key, "offline: reading from local store");
            let Some(record) = self.store.get(&key).await? else {
                info!(city = %key, "no cached record");
                return Ok(LookupOutcome::NoOfflineData);
            };

            let age = self.clock.now() - record.cached_at;
            if age < Duration::minutes(FRESHNESS_WINDOW_MINUTES) {
                info!(city = %key, age_minutes = age.num_minutes(), "serving cached record");
                return Ok(LookupOutcome::Cached(record.report));
            }

            info!(city = %key, age_minutes = age.num_minutes(), "cached record is stale");
            return Ok(LookupOutcome::NoOfflineData);
        }

        info!(city = %key, "online: fetching from weather API");
        let report = self.source.fetch_current(city).await.map_err(|err| match err {
            WeatherError::CityNotFound(city) => LookupError::CityNotFound(city),
            other => LookupError::Network(other),
        })?;

        let record = StoredReport {
            city: key,
            report: report.clone(),
            cached_at: self.clock.now(),
        };
        if let Err(err) = self.store.put(&record).await {
            // Best-effort: the fresh data is still worth returning.
            warn!(city = %record.city, error = %err, "failed to persist weather record");
        }

        Ok(LookupOutcome::Fresh(report))
    }
}
