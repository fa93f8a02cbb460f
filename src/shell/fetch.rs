//! Network fetching for shell assets

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::CachedAsset;

/// Errors fetching an asset from the network
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response could be obtained at all
    #[error("Asset unreachable: {0}")]
    Unreachable(String),

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fetches a resource and captures it as a `CachedAsset`.
///
/// Implemented over HTTP in production and stubbed in tests so interception
/// behavior can be exercised without a network.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<CachedAsset, FetchError>;
}

/// HTTP asset fetcher resolving relative shell paths against a base URL.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: Client,
    base_url: String,
}

impl HttpAssetFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), url)
        }
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<CachedAsset, FetchError> {
        let response = self.client.get(self.resolve(url)).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.bytes().await?.to_vec();

        Ok(CachedAsset {
            url: url.to_string(),
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_relative_paths() {
        let fetcher = HttpAssetFetcher::new("https://app.example.com/");
        assert_eq!(
            fetcher.resolve("/index.html"),
            "https://app.example.com/index.html"
        );
    }

    #[test]
    fn test_resolve_leaves_absolute_urls_alone() {
        let fetcher = HttpAssetFetcher::new("https://app.example.com");
        assert_eq!(
            fetcher.resolve("https://cdn.example.com/icon.png"),
            "https://cdn.example.com/icon.png"
        );
    }
}
