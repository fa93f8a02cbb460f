//! In-memory weather store
//!
//! Backs the store contract with a HashMap. Used in tests and as a
//! per-session fallback when no cache directory can be resolved — lookups
//! still work, they just don't survive the process.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{StoreError, WeatherStore};
use crate::data::StoredReport;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, StoredReport>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeatherStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StoredReport>, StoreError> {
        let records = self.records.lock().expect("store mutex poisoned");
        Ok(records.get(key).cloned())
    }

    async fn put(&self, record: &StoredReport) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        records.insert(record.city.clone(), record.clone());
        Ok(())
    }
}
