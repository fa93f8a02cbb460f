//! Disk-backed weather store
//!
//! Persists each city's record as a JSON file in an XDG-compliant cache
//! directory (`~/.cache/skycast/weather/` on Linux), so cached lookups
//! survive across sessions.

use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use tokio::fs;

use super::{StoreError, WeatherStore};
use crate::data::StoredReport;

/// Weather store writing one JSON file per normalized city key.
#[derive(Debug, Clone)]
pub struct DiskStore {
    store_dir: PathBuf,
}

impl DiskStore {
    /// Creates a DiskStore under the XDG cache directory.
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g. no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "skycast")?;
        let store_dir = project_dirs.cache_dir().join("weather");
        Some(Self { store_dir })
    }

    /// Creates a DiskStore rooted at a custom directory.
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(store_dir: PathBuf) -> Self {
        Self { store_dir }
    }

    // City names are free text; hashing keeps arbitrary keys (including path
    // separators) inside the store directory.
    fn record_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.store_dir.join(format!("{}.json", hex::encode(digest)))
    }
}

#[async_trait]
impl WeatherStore for DiskStore {
    async fn get(&self, key: &str) -> Result<Option<StoredReport>, StoreError> {
        let path = self.record_path(key);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record: StoredReport = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    async fn put(&self, record: &StoredReport) -> Result<(), StoreError> {
        fs::create_dir_all(&self.store_dir).await?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.city), json).await?;
        Ok(())
    }
}
