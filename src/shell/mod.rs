//! Asset shell cache
//!
//! Keeps a fixed list of application shell resources available without
//! network access, and transparently extends the cache to other resources as
//! they are successfully fetched. Cached assets live in a named cache
//! generation; activating a new generation purges every other one, so exactly
//! one generation is live at a time.
//!
//! This is a library component for hosts that serve the application shell; it
//! operates independently of the weather lookup and is not wired into the
//! `skycast` binary.

mod fetch;
mod store;

pub use fetch::{AssetFetcher, FetchError, HttpAssetFetcher};
pub use store::{AssetStore, AssetStoreError, DiskAssetStore, MemoryAssetStore};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A captured response stored in the shell cache, keyed by request URL
/// within its generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedAsset {
    /// Request URL this response was captured for
    pub url: String,
    /// HTTP status at time of capture
    pub status: u16,
    /// Content-Type header, if the response carried one
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

/// Lifecycle of a shell cache generation.
///
/// A generation installs (bulk-populates the shell list), waits until it is
/// allowed to take over, then activates (purging superseded generations) and
/// serves interceptions until replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Installing,
    Waiting,
    Active,
}

/// Cache-first interceptor for application shell resources.
pub struct ShellCache {
    generation: String,
    store: Arc<dyn AssetStore>,
    fetcher: Arc<dyn AssetFetcher>,
    phase: LifecyclePhase,
}

impl ShellCache {
    pub fn new(
        generation: impl Into<String>,
        store: Arc<dyn AssetStore>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> Self {
        Self {
            generation: generation.into(),
            store,
            fetcher,
            phase: LifecyclePhase::Installing,
        }
    }

    /// Name of this cache generation.
    pub fn generation(&self) -> &str {
        &self.generation
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Bulk-populates this generation with the fixed shell resource list.
    ///
    /// Individual fetch or store failures are logged and skipped; partial
    /// population is accepted and nothing is rolled back. Re-installing the
    /// same generation with the same list overwrites entries identically.
    ///
    /// Returns the number of assets cached.
    pub async fn install(&mut self, shell_urls: &[&str]) -> usize {
        info!(generation = %self.generation, assets = shell_urls.len(), "installing shell cache");
        let mut cached = 0;

        for url in shell_urls {
            match self.fetcher.fetch(url).await {
                Ok(asset) => match self.store.put(&self.generation, &asset).await {
                    Ok(()) => cached += 1,
                    Err(err) => {
                        warn!(url, error = %err, "failed to store shell asset");
                    }
                },
                Err(err) => {
                    warn!(url, error = %err, "failed to fetch shell asset");
                }
            }
        }

        self.phase = LifecyclePhase::Waiting;
        cached
    }

    /// Takes over from any previous generation: every generation whose name
    /// differs from this one is deleted wholesale.
    pub async fn activate(&mut self) -> Result<(), AssetStoreError> {
        info!(generation = %self.generation, "activating shell cache");

        for name in self.store.generations().await? {
            if name != self.generation {
                info!(old = %name, "deleting superseded cache generation");
                self.store.delete_generation(&name).await?;
            }
        }

        self.phase = LifecyclePhase::Active;
        Ok(())
    }

    /// Resolves a resource request: cache-first, then network.
    ///
    /// A network response with status 200 is copied into the cache for future
    /// interceptions; other statuses are returned but not cached. If the
    /// network request fails entirely, resolves to `None` — there is no
    /// offline fallback page, the caller treats it as a failed load.
    pub async fn intercept(&self, url: &str) -> Result<Option<CachedAsset>, AssetStoreError> {
        if let Some(asset) = self.store.get(&self.generation, url).await? {
            info!(url, "serving from cache");
            return Ok(Some(asset));
        }

        info!(url, "fetching from network");
        let asset = match self.fetcher.fetch(url).await {
            Ok(asset) => asset,
            Err(err) => {
                warn!(url, error = %err, "network fetch failed");
                return Ok(None);
            }
        };

        if asset.status == 200 {
            if let Err(err) = self.store.put(&self.generation, &asset).await {
                warn!(url, error = %err, "failed to cache fetched asset");
            }
        }

        Ok(Some(asset))
    }
}
