use crate::api_doc::ApiDoc;
use crate::error::HealthResponse;
use crate::models::timestamp;
use crate::routes;
use axum::{http::StatusCode, Json};
use chrono::Utc;
use utoipa::OpenApi;

/// GET /health handler - Liveness probe
///
/// Reports that the process is up. Does not touch any record collection.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: timestamp::format(&Utc::now()),
        }),
    )
}

/// GET /api-docs/openapi.json handler - OpenAPI document for this service
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{empty_request, send};
    use axum::{routing::get, Router};

    fn setup_test_app() -> Router {
        Router::new()
            .route(routes::HEALTH, get(health_handler))
            .route(routes::OPENAPI_JSON, get(openapi_handler))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = setup_test_app();
        let before = Utc::now() - chrono::Duration::milliseconds(1);

        let (status, body) = send(&app, empty_request("GET", "/health")).await;

        assert_eq!(status, StatusCode::OK);
        let response_json: HealthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response_json.status, "ok");
        let reported = chrono::DateTime::parse_from_rfc3339(&response_json.timestamp)
            .unwrap()
            .with_timezone(&Utc);
        assert!(reported >= before);
        assert!(response_json.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_record_routes() {
        let app = setup_test_app();

        let (status, body) = send(&app, empty_request("GET", "/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        let paths = body["paths"].as_object().unwrap();
        for path in [
            routes::HEALTH,
            routes::MATERNAL_LIST,
            routes::MATERNAL_ITEM,
            routes::CHILD_LIST,
            routes::CHILD_ITEM,
            routes::GROWTH_LIST,
            routes::RECORDS,
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert!(paths[routes::MATERNAL_ITEM].get("put").is_some());
        assert!(paths[routes::GROWTH_LIST].get("post").is_some());
    }
}
