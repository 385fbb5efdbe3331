// region:    --- Imports
use super::FurnitureStore;
use crate::error::StoreError;
use crate::furniture::model::FurnitureRecord;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

// endregion: --- Imports

// region:    --- In-Memory Store
/// `BTreeMap` backed store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryFurnitureStore {
    records: RwLock<BTreeMap<String, FurnitureRecord>>,
}

impl InMemoryFurnitureStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FurnitureStore for InMemoryFurnitureStore {
    async fn insert(&self, key: &str, record: &FurnitureRecord) -> Result<(), StoreError> {
        debug!("{:<12} --> insert key: {}", "Store", key);
        self.records
            .write()
            .await
            .insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<FurnitureRecord>, StoreError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<Option<FurnitureRecord>, StoreError> {
        debug!("{:<12} --> remove key: {}", "Store", key);
        Ok(self.records.write().await.remove(key))
    }

    async fn values(&self) -> Result<Vec<FurnitureRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}

// endregion: --- In-Memory Store
