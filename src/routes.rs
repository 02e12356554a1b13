use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const MATERNAL_LIST: &str = "/api/maternal";
pub const MATERNAL_ITEM: &str = "/api/maternal/{id}";
pub const CHILD_LIST: &str = "/api/child";
pub const CHILD_ITEM: &str = "/api/child/{id}";
pub const GROWTH_LIST: &str = "/api/growth";
pub const RECORDS: &str = "/api/records";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Method and path of every record route, logged at startup
pub const ENDPOINTS: [(&str, &str); 12] = [
    ("GET", MATERNAL_LIST),
    ("POST", MATERNAL_LIST),
    ("GET", MATERNAL_ITEM),
    ("PUT", MATERNAL_ITEM),
    ("GET", CHILD_LIST),
    ("POST", CHILD_LIST),
    ("GET", CHILD_ITEM),
    ("PUT", CHILD_ITEM),
    ("GET", GROWTH_LIST),
    ("POST", GROWTH_LIST),
    ("GET", RECORDS),
    ("GET", OPENAPI_JSON),
];

/// Build the full application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(
            MATERNAL_LIST,
            get(handlers::list_maternal).post(handlers::create_maternal),
        )
        .route(
            MATERNAL_ITEM,
            get(handlers::get_maternal).put(handlers::replace_maternal),
        )
        .route(
            CHILD_LIST,
            get(handlers::list_child).post(handlers::create_child),
        )
        .route(
            CHILD_ITEM,
            get(handlers::get_child).put(handlers::replace_child),
        )
        .route(
            GROWTH_LIST,
            get(handlers::list_growth).post(handlers::create_growth),
        )
        .route(RECORDS, get(handlers::sync_handler))
        .route(OPENAPI_JSON, get(handlers::openapi_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
