//! Weather API client
//!
//! This module provides functionality to fetch current weather conditions by
//! city name and parse the response into our WeatherReport data structure.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::WeatherReport;

/// Default base URL for the current-conditions endpoint
const DEFAULT_BASE_URL: &str = "https://api.weatherbit.io/v2.0/current";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed (transport-level)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status code
    #[error("Weather API returned status {0}")]
    Status(u16),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response was valid but contained no location entries
    #[error("No weather data found for city: {0}")]
    CityNotFound(String),
}

/// Client for fetching current weather conditions by city name
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a new WeatherClient for the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a new WeatherClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the endpoint base URL (e.g. for a local proxy)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current weather for the given city
    ///
    /// Issues `GET <base>?city=<name>&key=<api_key>&units=M` and returns the
    /// first location entry from the response.
    ///
    /// # Returns
    /// * `Ok(WeatherReport)` - Current conditions for the best-matching location
    /// * `Err(WeatherError)` - If the request, parsing, or lookup fails
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("city", city), ("key", self.api_key.as_str()), ("units", "M")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        debug!(city, bytes = text.len(), "weather API response received");
        let api_response: CurrentResponse = serde_json::from_str(&text)?;

        parse_response(api_response, city)
    }
}

/// Extract the first location entry from a parsed API response.
fn parse_response(response: CurrentResponse, city: &str) -> Result<WeatherReport, WeatherError> {
    response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))
}

/// Weather API response structure: an ordered list of matching locations
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    data: Vec<WeatherReport>,
}
