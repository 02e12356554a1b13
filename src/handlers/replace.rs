use crate::error::{ApiError, ErrorResponse};
use crate::handlers::{parse_record_id, record_fields};
use crate::models::{Record, RecordFields};
use crate::routes;
use crate::state::AppState;
use crate::store::RecordCollection;
use axum::{
    extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json,
};

async fn replace_record(
    collection: &RecordCollection,
    id_str: String,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let id = parse_record_id(collection.kind(), &id_str)?;
    let fields = record_fields(payload)?;

    match collection.replace(id, fields).await {
        Some(record) => {
            tracing::info!("Successfully replaced {} record with id: {}", collection.kind(), id);
            Ok((StatusCode::OK, Json(record)))
        }
        None => Err(ApiError::RecordNotFound {
            collection: collection.kind(),
            id: id_str,
        }),
    }
}

/// PUT /api/maternal/:id handler - Replace a maternal record (last write wins)
///
/// The body replaces the stored fields wholesale; the path id always wins
/// over any `id` in the body.
#[utoipa::path(
    put,
    path = routes::MATERNAL_ITEM,
    params(
        ("id" = i64, Path, description = "Record id assigned at creation")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Record replaced", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    tag = "maternal"
)]
pub async fn replace_maternal(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    replace_record(&state.store.maternal, id_str, payload).await
}

/// PUT /api/child/:id handler - Replace a child record (last write wins)
#[utoipa::path(
    put,
    path = routes::CHILD_ITEM,
    params(
        ("id" = i64, Path, description = "Record id assigned at creation")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Record replaced", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    tag = "child"
)]
pub async fn replace_child(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    replace_record(&state.store.child, id_str, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::create::{create_child, create_maternal};
    use crate::handlers::get::{get_child, get_maternal};
    use crate::handlers::list::list_maternal;
    use crate::handlers::test_support::{empty_request, json_request, send};
    use axum::{body::Body, http::Request, routing::get, Router};
    use serde_json::json;

    fn setup_test_app() -> Router {
        Router::new()
            .route(routes::MATERNAL_LIST, get(list_maternal).post(create_maternal))
            .route(routes::MATERNAL_ITEM, get(get_maternal).put(replace_maternal))
            .route(routes::CHILD_LIST, axum::routing::post(create_child))
            .route(routes::CHILD_ITEM, get(get_child).put(replace_child))
            .with_state(AppState::new())
    }

    #[tokio::test]
    async fn test_replace_endpoint_success() {
        let app = setup_test_app();

        let (_, created) = send(
            &app,
            json_request("POST", "/api/maternal", &json!({"name": "Alice", "ward": "A"})),
        )
        .await;
        let id = created["id"].as_i64().unwrap();
        let uri = format!("/api/maternal/{}", id);

        let (status, replaced) = send(
            &app,
            json_request("PUT", &uri, &json!({"name": "Alicia", "visits": 3})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(replaced["id"], json!(id));
        assert_eq!(replaced["name"], "Alicia");
        assert_eq!(replaced["visits"], 3);
        // Full replace: fields missing from the new body are gone
        assert!(replaced.get("ward").is_none());

        let (status, fetched) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, replaced);
    }

    #[tokio::test]
    async fn test_replace_endpoint_path_id_wins_over_body() {
        let app = setup_test_app();

        let (_, created) = send(&app, json_request("POST", "/api/child", &json!({"name": "Ama"}))).await;
        let id = created["id"].as_i64().unwrap();

        let (status, replaced) = send(
            &app,
            json_request("PUT", &format!("/api/child/{}", id), &json!({"id": 12345, "name": "Ama K."})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(replaced["id"], json!(id));
        assert_eq!(replaced["name"], "Ama K.");
    }

    #[tokio::test]
    async fn test_replace_endpoint_keeps_position() {
        let app = setup_test_app();

        let (_, first) = send(&app, json_request("POST", "/api/maternal", &json!({"n": 1}))).await;
        let (_, second) = send(&app, json_request("POST", "/api/maternal", &json!({"n": 2}))).await;
        let first_id = first["id"].as_i64().unwrap();

        let (_, replaced) = send(
            &app,
            json_request("PUT", &format!("/api/maternal/{}", first_id), &json!({"n": 10})),
        )
        .await;

        let (_, listed) = send(&app, empty_request("GET", "/api/maternal")).await;
        assert_eq!(listed, json!([replaced, second]));
    }

    #[tokio::test]
    async fn test_replace_endpoint_without_body_clears_fields() {
        let app = setup_test_app();

        let (_, created) = send(
            &app,
            json_request("POST", "/api/maternal", &json!({"name": "Alice", "ward": "A"})),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/maternal/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, replaced) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        let keys: Vec<&str> = replaced.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "server_synced_at"]);
        assert_eq!(replaced["id"], json!(id));
    }

    #[tokio::test]
    async fn test_replace_endpoint_invalid_json() {
        let app = setup_test_app();

        let (_, created) = send(&app, json_request("POST", "/api/child", &json!({"name": "Ama"}))).await;
        let uri = format!("/api/child/{}", created["id"].as_i64().unwrap());

        let request = Request::builder()
            .method("PUT")
            .uri(&uri)
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, fetched) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_replace_endpoint_not_found() {
        let app = setup_test_app();

        let (status, body) = send(
            &app,
            json_request("PUT", "/api/maternal/999999", &json!({"name": "nobody"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Record not found"}));

        let (_, listed) = send(&app, empty_request("GET", "/api/maternal")).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_replace_endpoint_non_numeric_id() {
        let app = setup_test_app();

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/child/abc", &json!({"name": "nobody"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
