//! Integration tests for the offline cache against real disk stores
//!
//! Exercises the lookup service over a disk-backed weather store and the
//! shell cache over a disk-backed asset store, using temporary directories.

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use skycast::clock::SystemClock;
use skycast::data::{Condition, WeatherError, WeatherReport};
use skycast::lookup::{LookupOutcome, LookupService, WeatherSource};
use skycast::shell::{AssetFetcher, AssetStore, CachedAsset, DiskAssetStore, FetchError, ShellCache};
use skycast::store::DiskStore;

fn sample_report(city: &str) -> WeatherReport {
    WeatherReport {
        city_name: city.to_string(),
        state_code: "XX".to_string(),
        temp: 21.0,
        app_temp: 20.0,
        sunrise: "06:00".to_string(),
        sunset: "18:00".to_string(),
        weather: Condition {
            description: "Scattered clouds".to_string(),
        },
        wind_spd: 3.0,
        wind_cdir_full: "south-southeast".to_string(),
    }
}

struct StubSource(Option<WeatherReport>);

#[async_trait]
impl WeatherSource for StubSource {
    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        self.0
            .clone()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))
    }
}

struct StubAssetFetcher;

#[async_trait]
impl AssetFetcher for StubAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<CachedAsset, FetchError> {
        Ok(CachedAsset {
            url: url.to_string(),
            status: 200,
            content_type: Some("text/html".to_string()),
            body: b"shell".to_vec(),
        })
    }
}

#[tokio::test]
async fn test_online_then_offline_lookup_round_trips_through_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = Arc::new(DiskStore::with_dir(temp_dir.path().to_path_buf()));

    let online = LookupService::new(
        Arc::new(StubSource(Some(sample_report("Lisbon")))),
        store.clone(),
        Arc::new(SystemClock),
    );
    let fetched = online.resolve_weather("Lisbon", true).await.unwrap();
    assert!(matches!(fetched, LookupOutcome::Fresh(_)));

    // A separate service over the same directory sees the cached record.
    let offline = LookupService::new(Arc::new(StubSource(None)), store, Arc::new(SystemClock));
    let outcome = offline.resolve_weather("lisbon", false).await.unwrap();

    match outcome {
        LookupOutcome::Cached(report) => {
            assert_eq!(report.city_name, "Lisbon");
            assert_eq!(report.weather.description, "Scattered clouds");
        }
        other => panic!("Expected Cached, got {:?}", other),
    }
}

#[tokio::test]
async fn test_city_with_path_separators_cannot_escape_store_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store_dir = temp_dir.path().join("store");
    let store = Arc::new(DiskStore::with_dir(store_dir));

    let service = LookupService::new(
        Arc::new(StubSource(Some(sample_report("../escaped")))),
        store,
        Arc::new(SystemClock),
    );
    service.resolve_weather("../escaped", true).await.unwrap();

    assert!(
        !temp_dir.path().join("escaped.json").exists(),
        "Record must not be written outside the store directory"
    );

    let outcome = service.resolve_weather("../escaped", false).await.unwrap();
    assert!(matches!(outcome, LookupOutcome::Cached(_)));
}

#[tokio::test]
async fn test_shell_generation_rollover_on_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = Arc::new(DiskAssetStore::with_dir(temp_dir.path().to_path_buf()));
    let shell = ["/", "/index.html", "/style.css"];

    let mut v1 = ShellCache::new("skycast-shell-v1", store.clone(), Arc::new(StubAssetFetcher));
    assert_eq!(v1.install(&shell).await, shell.len());
    v1.activate().await.unwrap();

    let mut v2 = ShellCache::new("skycast-shell-v2", store.clone(), Arc::new(StubAssetFetcher));
    v2.install(&shell).await;
    v2.activate().await.unwrap();

    assert_eq!(
        store.generations().await.unwrap(),
        vec!["skycast-shell-v2".to_string()]
    );
    let served = v2.intercept("/index.html").await.unwrap();
    assert_eq!(served.unwrap().body, b"shell".to_vec());
}
