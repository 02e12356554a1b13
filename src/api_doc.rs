use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "nutritrack-server API",
        version = "1.0.0",
        description = "In-memory record store and sync target for maternal, child and growth records"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_maternal,
        handlers::list::list_child,
        handlers::list::list_growth,
        handlers::get::get_maternal,
        handlers::get::get_child,
        handlers::create::create_maternal,
        handlers::create::create_child,
        handlers::create::create_growth,
        handlers::replace::replace_maternal,
        handlers::replace::replace_child,
        handlers::sync::sync_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "maternal", description = "Maternal health records"),
        (name = "child", description = "Child health records"),
        (name = "growth", description = "Growth measurements"),
        (name = "sync", description = "Bulk snapshot for client sync")
    )
)]
pub struct ApiDoc;
