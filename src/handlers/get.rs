use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_record_id;
use crate::models::Record;
use crate::routes;
use crate::state::AppState;
use crate::store::RecordCollection;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

async fn get_record(
    collection: &RecordCollection,
    id_str: String,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let id = parse_record_id(collection.kind(), &id_str)?;

    match collection.get(id).await {
        Some(record) => {
            tracing::debug!("Retrieved {} record with id: {}", collection.kind(), id);
            Ok((StatusCode::OK, Json(record)))
        }
        None => Err(ApiError::RecordNotFound {
            collection: collection.kind(),
            id: id_str,
        }),
    }
}

/// GET /api/maternal/:id handler - Retrieve one maternal record
#[utoipa::path(
    get,
    path = routes::MATERNAL_ITEM,
    params(
        ("id" = i64, Path, description = "Record id assigned at creation")
    ),
    responses(
        (status = 200, description = "Record found", body = serde_json::Value),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    tag = "maternal"
)]
pub async fn get_maternal(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    get_record(&state.store.maternal, id_str).await
}

/// GET /api/child/:id handler - Retrieve one child record
#[utoipa::path(
    get,
    path = routes::CHILD_ITEM,
    params(
        ("id" = i64, Path, description = "Record id assigned at creation")
    ),
    responses(
        (status = 200, description = "Record found", body = serde_json::Value),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    tag = "child"
)]
pub async fn get_child(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    get_record(&state.store.child, id_str).await
}
