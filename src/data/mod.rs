//! Core data models for Skycast
//!
//! This module contains the data types used throughout the application for
//! representing current weather conditions and the records persisted to the
//! offline cache.

pub mod weather;

pub use weather::{WeatherClient, WeatherError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather conditions for a single location, as returned by the
/// weather API. Stored verbatim in the offline cache — the cache never
/// inspects these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved location name (e.g. "London")
    pub city_name: String,
    /// Region/state code for the location
    pub state_code: String,
    /// Temperature in Celsius
    pub temp: f64,
    /// Feels-like temperature in Celsius
    pub app_temp: f64,
    /// Sunrise time as reported by the API (HH:MM)
    pub sunrise: String,
    /// Sunset time as reported by the API (HH:MM)
    pub sunset: String,
    /// Textual condition description
    pub weather: Condition,
    /// Wind speed in m/s
    pub wind_spd: f64,
    /// Full cardinal wind direction (e.g. "west-southwest")
    pub wind_cdir_full: String,
}

/// Condition description nested object from the API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

/// A weather report persisted to the offline store.
///
/// There is at most one record per normalized city key; writing a city that is
/// already present overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    /// Normalized city key this record is stored under
    pub city: String,
    /// The cached payload
    pub report: WeatherReport,
    /// When the record was written
    pub cached_at: DateTime<Utc>,
}

/// Normalizes a city name into the key used for all store operations.
///
/// Lookups for "Paris", " paris " and "PARIS" all address the same record.
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}
