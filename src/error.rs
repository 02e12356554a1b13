use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::CollectionKind;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Message returned for every lookup of an absent record
pub const RECORD_NOT_FOUND: &str = "Record not found";

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and a JSON `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// No record with this id in the collection. `id` is the raw path
    /// segment, which may not even be numeric.
    RecordNotFound { collection: CollectionKind, id: String },
    /// Request body rejected by the JSON extractor
    InvalidBody(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RecordNotFound { collection, id } => {
                tracing::info!("{} record not found with id: {}", collection, id);
                (StatusCode::NOT_FOUND, RECORD_NOT_FOUND.to_string())
            }
            ApiError::InvalidBody(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid JSON body: {}", rejection.body_text()),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
