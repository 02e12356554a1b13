use crate::models::Record;
use crate::routes;
use crate::state::AppState;
use crate::store::RecordCollection;
use axum::{extract::State, http::StatusCode, Json};

async fn list_records(collection: &RecordCollection) -> (StatusCode, Json<Vec<Record>>) {
    let records = collection.list().await;
    tracing::debug!("Listed {} {} records", records.len(), collection.kind());
    (StatusCode::OK, Json(records))
}

/// GET /api/maternal handler - List every maternal record in insertion order
#[utoipa::path(
    get,
    path = routes::MATERNAL_LIST,
    responses(
        (status = 200, description = "All maternal records", body = [serde_json::Value])
    ),
    tag = "maternal"
)]
pub async fn list_maternal(State(state): State<AppState>) -> (StatusCode, Json<Vec<Record>>) {
    list_records(&state.store.maternal).await
}

/// GET /api/child handler - List every child record in insertion order
#[utoipa::path(
    get,
    path = routes::CHILD_LIST,
    responses(
        (status = 200, description = "All child records", body = [serde_json::Value])
    ),
    tag = "child"
)]
pub async fn list_child(State(state): State<AppState>) -> (StatusCode, Json<Vec<Record>>) {
    list_records(&state.store.child).await
}

/// GET /api/growth handler - List every growth measurement in insertion order
#[utoipa::path(
    get,
    path = routes::GROWTH_LIST,
    responses(
        (status = 200, description = "All growth measurements", body = [serde_json::Value])
    ),
    tag = "growth"
)]
pub async fn list_growth(State(state): State<AppState>) -> (StatusCode, Json<Vec<Record>>) {
    list_records(&state.store.growth).await
}
