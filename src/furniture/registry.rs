//! Furniture registry operations
//! 1. create
//! 2. list
//! 3. get
//! 4. update
//! 5. delete
// region:    --- Imports
use super::model::{fields, FurniturePatch, FurnitureRecord, FurnitureStatus};
use crate::clock::{record_timestamp, Clock};
use crate::error::{Action, RegistryError};
use crate::store::FurnitureStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Furniture Registry
pub struct FurnitureRegistry {
    store: Arc<dyn FurnitureStore>,
    clock: Arc<dyn Clock>,
}

impl FurnitureRegistry {
    pub fn new(store: Arc<dyn FurnitureStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// 1. create
    ///
    /// Body fields are laid over the generated defaults, so a caller can
    /// replace `id`, `createdAt` or `status` as well.
    pub async fn create(&self, patch: FurniturePatch) -> Result<FurnitureRecord, RegistryError> {
        let mut record = FurnitureRecord::default();
        record.set(fields::ID, Uuid::new_v4().to_string());
        record.set(fields::CREATED_AT, record_timestamp(self.clock.as_ref()));
        record.set(fields::UPDATED_AT, Value::Null);
        record.set(fields::STATUS, FurnitureStatus::Available);
        record.overlay(patch);

        let key = record.store_key();
        self.store.insert(&key, &record).await?;
        info!("{:<12} --> created id: {}", "Registry", key);
        Ok(record)
    }

    /// 2. list
    pub async fn list(&self) -> Result<Vec<FurnitureRecord>, RegistryError> {
        Ok(self.store.values().await?)
    }

    /// 3. get
    pub async fn get(&self, id: &str) -> Result<FurnitureRecord, RegistryError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id, Action::Read))
    }

    /// 4. update
    ///
    /// Shallow merge: stored fields, then body fields, then a fresh `updatedAt`.
    /// The result is written back under `id` even if the body replaced the `id` field.
    pub async fn update(
        &self,
        id: &str,
        patch: FurniturePatch,
    ) -> Result<FurnitureRecord, RegistryError> {
        let mut record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id, Action::Update))?;

        record.overlay(patch);
        record.set(fields::UPDATED_AT, record_timestamp(self.clock.as_ref()));

        self.store.insert(id, &record).await?;
        info!("{:<12} --> updated id: {}", "Registry", id);
        Ok(record)
    }

    /// 5. delete
    pub async fn delete(&self, id: &str) -> Result<FurnitureRecord, RegistryError> {
        let record = self
            .store
            .remove(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id, Action::Delete))?;
        info!("{:<12} --> deleted id: {}", "Registry", id);
        Ok(record)
    }
}

// endregion: --- Furniture Registry
