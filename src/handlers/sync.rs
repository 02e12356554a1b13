use crate::models::SyncSnapshot;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/records handler - Snapshot of every collection for client sync
///
/// Returns `{maternal, child, growth, synced_at}`, each array in insertion
/// order.
#[utoipa::path(
    get,
    path = routes::RECORDS,
    responses(
        (status = 200, description = "All records from every collection", body = serde_json::Value)
    ),
    tag = "sync"
)]
pub async fn sync_handler(State(state): State<AppState>) -> (StatusCode, Json<SyncSnapshot>) {
    let snapshot = state.store.snapshot().await;

    tracing::info!(
        "Sync snapshot: {} maternal, {} child, {} growth",
        snapshot.maternal.len(),
        snapshot.child.len(),
        snapshot.growth.len()
    );

    (StatusCode::OK, Json(snapshot))
}
