// region:    --- Imports
use crate::furniture::{FurniturePatch, FurnitureRegistry};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Request Body
/// Body without a JSON content type carries no fields. Malformed JSON is still rejected.
fn patch_or_empty(
    body: Result<Json<FurniturePatch>, JsonRejection>,
) -> Result<FurniturePatch, JsonRejection> {
    match body {
        Ok(Json(patch)) => Ok(patch),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(FurniturePatch::default()),
        Err(rejection) => Err(rejection),
    }
}

// endregion: --- Request Body

// region:    --- Command Handlers

/// POST /furniture
pub async fn handle_create_furniture(
    State(registry): State<Arc<FurnitureRegistry>>,
    body: Result<Json<FurniturePatch>, JsonRejection>,
) -> impl IntoResponse {
    info!("{:<12} --> create furniture", "Handler");
    let patch = match patch_or_empty(body) {
        Ok(patch) => patch,
        Err(rejection) => return rejection.into_response(),
    };
    match registry.create(patch).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /furniture/:id
pub async fn handle_update_furniture(
    State(registry): State<Arc<FurnitureRegistry>>,
    Path(id): Path<String>,
    body: Result<Json<FurniturePatch>, JsonRejection>,
) -> impl IntoResponse {
    info!("{:<12} --> update furniture id: {}", "Handler", id);
    let patch = match patch_or_empty(body) {
        Ok(patch) => patch,
        Err(rejection) => return rejection.into_response(),
    };
    match registry.update(&id, patch).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /furniture/:id
pub async fn handle_delete_furniture(
    State(registry): State<Arc<FurnitureRegistry>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> delete furniture id: {}", "Handler", id);
    match registry.delete(&id).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// GET /furniture
pub async fn handle_list_furniture(
    State(registry): State<Arc<FurnitureRegistry>>,
) -> impl IntoResponse {
    info!("{:<12} --> list furniture", "HandlerQuery");
    match registry.list().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /furniture/:id
pub async fn handle_get_furniture(
    State(registry): State<Arc<FurnitureRegistry>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> get furniture id: {}", "HandlerQuery", id);
    match registry.get(&id).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Query Handlers
