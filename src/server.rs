// region:    --- Imports
use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::furniture::FurnitureRegistry;
use crate::handlers;
use crate::store::{FurnitureStore, InMemoryFurnitureStore, PgFurnitureStore};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Router
/// All furniture routes with CORS and the body size limit applied
pub fn build_router(registry: Arc<FurnitureRegistry>, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/furniture",
            get(handlers::handle_list_furniture).post(handlers::handle_create_furniture),
        )
        .route(
            "/furniture/:id",
            get(handlers::handle_get_furniture)
                .put(handlers::handle_update_furniture)
                .delete(handlers::handle_delete_furniture),
        )
        .layer(cors)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(registry)
}

// endregion: --- Router

// region:    --- Store Selection
/// PostgreSQL when `DATABASE_URL` is configured, otherwise an in-memory store
pub async fn build_store(config: &AppConfig) -> Result<Arc<dyn FurnitureStore>, sqlx::Error> {
    match &config.database_url {
        Some(url) => {
            let db_manager = DatabaseManager::new(url, config.database_max_connections).await?;
            db_manager.initialize_database().await?;
            info!("{:<12} --> using PostgreSQL store", "Main");
            Ok(Arc::new(PgFurnitureStore::new(Arc::new(db_manager))))
        }
        None => {
            warn!(
                "{:<12} --> DATABASE_URL not set, records will not survive a restart",
                "Main"
            );
            Ok(Arc::new(InMemoryFurnitureStore::new()))
        }
    }
}

// endregion: --- Store Selection

// region:    --- Serve
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );
    axum::serve(listener, router.into_make_service()).await
}

// endregion: --- Serve
