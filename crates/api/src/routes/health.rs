use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Liveness check with a database round-trip. Always returns 200; a
/// failing pool shows up as `db_healthy: false` so probes can tell a
/// dead database apart from a dead server.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cinelog_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health routes, mounted at the root outside the site tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
