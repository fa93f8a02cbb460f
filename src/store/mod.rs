//! Persistent weather store
//!
//! This module defines the key-value contract the lookup service reads and
//! writes through, plus two implementations: a disk-backed store that persists
//! one JSON file per city in an XDG-compliant cache directory, and an
//! in-memory store used in tests and as a fallback when no cache directory
//! can be resolved.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::data::StoredReport;

/// Errors from persistent-store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read/write/create failure
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored entry could not be serialized or deserialized
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Single-keyspace store for weather records, keyed by normalized city name.
///
/// `put` is an upsert: writing a key that is already present overwrites it.
/// Implementations never evict — staleness is decided by the reader.
#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// Returns the stored record for the key, or `None` on a miss.
    async fn get(&self, key: &str) -> Result<Option<StoredReport>, StoreError>;

    /// Inserts or overwrites the record under its city key.
    async fn put(&self, record: &StoredReport) -> Result<(), StoreError>;
}
