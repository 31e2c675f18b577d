//! Health route handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

/// GET /api/health/ - Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "message": "Server is up!" }))
}

/// GET /api/health/neo4j/ - Neo4j connectivity probe.
pub async fn neo4j_health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.graph.check_connectivity().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))),
        Err(e) => {
            warn!(error = %e, "Neo4j health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ok": false, "error": e.to_string() })),
            )
        }
    }
}
