// region:    --- Imports
use crate::error::StoreError;
use crate::furniture::model::FurnitureRecord;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Modules
pub mod memory;
pub mod postgres;
pub mod queries;

pub use memory::InMemoryFurnitureStore;
pub use postgres::PgFurnitureStore;

// endregion: --- Modules

// region:    --- Furniture Store Trait
/// Ordered key-value store holding furniture records by id.
///
/// Each call is atomic on its own. Nothing spans two calls, so a
/// read followed by a write may interleave with other requests.
#[async_trait]
pub trait FurnitureStore: Send + Sync {
    /// Insert or overwrite the record under `key`
    async fn insert(&self, key: &str, record: &FurnitureRecord) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<FurnitureRecord>, StoreError>;

    /// Remove and return the record under `key`
    async fn remove(&self, key: &str) -> Result<Option<FurnitureRecord>, StoreError>;

    /// All records in ascending key order
    async fn values(&self) -> Result<Vec<FurnitureRecord>, StoreError>;
}

// endregion: --- Furniture Store Trait
