// region:    --- Imports
use super::{queries, FurnitureStore};
use crate::database::DatabaseManager;
use crate::error::StoreError;
use crate::furniture::model::FurnitureRecord;
use async_trait::async_trait;
use sqlx::types::Json;
use std::sync::Arc;
use tracing::debug;

// endregion: --- Imports

// region:    --- Postgres Store
/// Store backed by the `furniture` table, one JSONB document per id
pub struct PgFurnitureStore {
    db_manager: Arc<DatabaseManager>,
}

impl PgFurnitureStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl FurnitureStore for PgFurnitureStore {
    async fn insert(&self, key: &str, record: &FurnitureRecord) -> Result<(), StoreError> {
        debug!("{:<12} --> upsert id: {}", "Store", key);
        sqlx::query(queries::UPSERT_FURNITURE)
            .bind(key)
            .bind(Json(record))
            .execute(self.db_manager.pool())
            .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<FurnitureRecord>, StoreError> {
        let row = sqlx::query_scalar::<_, Json<FurnitureRecord>>(queries::GET_FURNITURE)
            .bind(key)
            .fetch_optional(self.db_manager.pool())
            .await?;
        Ok(row.map(|Json(record)| record))
    }

    async fn remove(&self, key: &str) -> Result<Option<FurnitureRecord>, StoreError> {
        debug!("{:<12} --> delete id: {}", "Store", key);
        let row = sqlx::query_scalar::<_, Json<FurnitureRecord>>(queries::DELETE_FURNITURE)
            .bind(key)
            .fetch_optional(self.db_manager.pool())
            .await?;
        Ok(row.map(|Json(record)| record))
    }

    async fn values(&self) -> Result<Vec<FurnitureRecord>, StoreError> {
        let rows = sqlx::query_scalar::<_, Json<FurnitureRecord>>(queries::GET_ALL_FURNITURE)
            .fetch_all(self.db_manager.pool())
            .await?;
        Ok(rows.into_iter().map(|Json(record)| record).collect())
    }
}

// endregion: --- Postgres Store
