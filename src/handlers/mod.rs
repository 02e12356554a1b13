pub mod health;
pub mod list;
pub mod get;
pub mod create;
pub mod replace;
pub mod sync;

pub use health::{health_handler, openapi_handler};
pub use list::{list_child, list_growth, list_maternal};
pub use get::{get_child, get_maternal};
pub use create::{create_child, create_growth, create_maternal};
pub use replace::{replace_child, replace_maternal};
pub use sync::sync_handler;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;
use crate::models::{RecordFields, RecordId};
use crate::store::CollectionKind;

/// Parse an `{id}` path segment. A non-numeric segment can never name a
/// stored record, so it is reported as not found.
fn parse_record_id(collection: CollectionKind, raw: &str) -> Result<RecordId, ApiError> {
    raw.parse::<RecordId>().map_err(|_| ApiError::RecordNotFound {
        collection,
        id: raw.to_string(),
    })
}

/// Unwrap a record body. A request that is not declared as JSON (no body,
/// or some other content type) counts as an empty record; JSON that fails to
/// parse or is not an object is rejected.
fn record_fields(payload: Result<Json<RecordFields>, JsonRejection>) -> Result<RecordFields, ApiError> {
    match payload {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(RecordFields::new()),
        Err(rejection) => Err(ApiError::InvalidBody(rejection)),
    }
}
