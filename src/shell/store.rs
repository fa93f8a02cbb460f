//! Generation-scoped asset storage
//!
//! Cached assets are grouped under a generation name; deleting a generation
//! removes all of its entries at once. The disk implementation keeps one
//! subdirectory per generation and one JSON file per asset, named by the
//! SHA-256 of the request URL so arbitrary URLs map to safe filenames.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::fs;

use super::CachedAsset;

/// Errors from asset-store operations
#[derive(Debug, Error)]
pub enum AssetStoreError {
    #[error("Asset store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Storage for cached assets, keyed by request URL within a generation.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn get(&self, generation: &str, url: &str) -> Result<Option<CachedAsset>, AssetStoreError>;

    /// Upsert: storing an URL already present in the generation overwrites it.
    async fn put(&self, generation: &str, asset: &CachedAsset) -> Result<(), AssetStoreError>;

    /// Names of all generations currently holding at least one entry.
    async fn generations(&self) -> Result<Vec<String>, AssetStoreError>;

    /// Deletes a generation and every asset under it.
    async fn delete_generation(&self, generation: &str) -> Result<(), AssetStoreError>;
}

/// Disk-backed asset store under a root directory.
#[derive(Debug, Clone)]
pub struct DiskAssetStore {
    root: PathBuf,
}

impl DiskAssetStore {
    pub fn with_dir(root: PathBuf) -> Self {
        Self { root }
    }

    fn asset_path(&self, generation: &str, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.root
            .join(generation)
            .join(format!("{}.json", hex::encode(digest)))
    }
}

#[async_trait]
impl AssetStore for DiskAssetStore {
    async fn get(&self, generation: &str, url: &str) -> Result<Option<CachedAsset>, AssetStoreError> {
        let path = self.asset_path(generation, url);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn put(&self, generation: &str, asset: &CachedAsset) -> Result<(), AssetStoreError> {
        fs::create_dir_all(self.root.join(generation)).await?;
        let json = serde_json::to_string(asset)?;
        fs::write(self.asset_path(generation, &asset.url), json).await?;
        Ok(())
    }

    async fn generations(&self) -> Result<Vec<String>, AssetStoreError> {
        let mut names = Vec::new();
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(err) => return Err(err.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn delete_generation(&self, generation: &str) -> Result<(), AssetStoreError> {
        match fs::remove_dir_all(self.root.join(generation)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// HashMap-backed asset store for tests.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    generations: Mutex<HashMap<String, HashMap<String, CachedAsset>>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn get(&self, generation: &str, url: &str) -> Result<Option<CachedAsset>, AssetStoreError> {
        let generations = self.generations.lock().expect("store mutex poisoned");
        Ok(generations.get(generation).and_then(|g| g.get(url)).cloned())
    }

    async fn put(&self, generation: &str, asset: &CachedAsset) -> Result<(), AssetStoreError> {
        let mut generations = self.generations.lock().expect("store mutex poisoned");
        generations
            .entry(generation.to_string())
            .or_default()
            .insert(asset.url.clone(), asset.clone());
        Ok(())
    }

    async fn generations(&self) -> Result<Vec<String>, AssetStoreError> {
        let generations = self.generations.lock().expect("store mutex poisoned");
        let mut names: Vec<String> = generations.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn delete_generation(&self, generation: &str) -> Result<(), AssetStoreError> {
        let mut generations = self.generations.lock().expect("store mutex poisoned");
        generations.remove(generation);
        Ok(())
    }
}
