use crate::error::{ApiError, ErrorResponse};
use crate::handlers::record_fields;
use crate::models::{Record, RecordFields};
use crate::routes;
use crate::state::AppState;
use crate::store::RecordCollection;
use axum::{
    extract::rejection::JsonRejection, extract::State, http::StatusCode, Json,
};

async fn create_record(
    collection: &RecordCollection,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let fields = record_fields(payload)?;

    let record = collection.create(fields).await;

    tracing::info!("Successfully stored {} record with id: {}", collection.kind(), record.id);
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/maternal handler - Store a new maternal record
///
/// Any JSON object is accepted, and a request without a JSON body stores an
/// empty record. The stored copy gains `id` and `server_synced_at`;
/// caller-supplied values for those keys are ignored.
#[utoipa::path(
    post,
    path = routes::MATERNAL_LIST,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Record stored", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "maternal"
)]
pub async fn create_maternal(
    State(state): State<AppState>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create_record(&state.store.maternal, payload).await
}

/// POST /api/child handler - Store a new child record
#[utoipa::path(
    post,
    path = routes::CHILD_LIST,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Record stored", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "child"
)]
pub async fn create_child(
    State(state): State<AppState>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create_record(&state.store.child, payload).await
}

/// POST /api/growth handler - Store a new growth measurement
#[utoipa::path(
    post,
    path = routes::GROWTH_LIST,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Measurement stored", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "growth"
)]
pub async fn create_growth(
    State(state): State<AppState>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create_record(&state.store.growth, payload).await
}
