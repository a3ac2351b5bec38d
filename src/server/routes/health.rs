//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (the built UI is in place)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::ServerState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once `index.html` exists under the static directory.
pub async fn readiness(State(state): State<Arc<ServerState>>) -> ServerResult<StatusCode> {
    if assets_present(&state).await {
        Ok(StatusCode::OK)
    } else {
        Err(ServerError::ServiceUnavailable(format!(
            "UI entry page {:?} not found",
            state.index_path()
        )))
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    let assets_ok = assets_present(&state).await;

    Json(HealthResponse {
        status: if assets_ok { "healthy" } else { "degraded" }.to_string(),
        assets: if assets_ok { "ok" } else { "missing" }.to_string(),
        catalog_courses: state.catalog.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn assets_present(state: &ServerState) -> bool {
    tokio::fs::metadata(state.index_path())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
