//! ClassScope UI Server
//!
//! Serves the built single-page UI, built with Axum. The review API is
//! a separate backend and is not proxied.
//!
//! # Endpoints
//!
//! ## UI
//! - `GET /app-config.json` - API base URL and school for the UI
//! - `GET /catalog.json` - course catalog of the configured school
//! - everything else - static files, falling back to `index.html`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use classscope::config::Config;
//! use classscope::server::{serve, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     let catalog = config.catalog.load_catalog()?;
//!     serve(ServerState::new(config, catalog)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// CORS layer for the configured origins; permissive when none are set
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: ServerState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_files = ServeDir::new(state.static_dir())
        .fallback(ServeFile::new(state.index_path()));

    let cors = cors_layer(&state.config.server.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/app-config.json", get(routes::app::app_config))
        .route("/catalog.json", get(routes::app::catalog))
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: ServerState) -> Result<(), ServerError> {
    let addr = state.config.server.addr();
    let static_dir = state.static_dir.clone();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("ClassScope UI listening on {} (serving {:?})", addr, static_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("ClassScope UI shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><title>ClassScope</title>";

    fn create_test_app(with_index: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_index {
            std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        }

        let mut config = Config::default();
        config.server.static_dir = dir.path().to_string_lossy().to_string();

        let router = build_router(ServerState::new(config, Catalog::builtin()));
        (router, dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app(true);
        let (status, _) = get(app, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_ready_without_index() {
        let (app, _dir) = create_test_app(false);
        let (status, body) = get(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false);
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: dto::HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "degraded");
        assert_eq!(health.assets, "missing");
        assert_eq!(health.catalog_courses, 12);
    }

    #[tokio::test]
    async fn test_app_config() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/app-config.json").await;
        assert_eq!(status, StatusCode::OK);

        let config: dto::AppConfigResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.institution, "uncch");
    }

    #[tokio::test]
    async fn test_catalog_json() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/catalog.json").await;
        assert_eq!(status, StatusCode::OK);

        let institution: crate::catalog::Institution = serde_json::from_slice(&body).unwrap();
        assert_eq!(institution.key, "uncch");
        assert_eq!(institution.course_count(), 12);
    }

    #[tokio::test]
    async fn test_catalog_json_unknown_school() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.server.static_dir = dir.path().to_string_lossy().to_string();
        config.catalog.school = "Nowhere College".to_string();

        let app = build_router(ServerState::new(config, Catalog::builtin()));
        let (status, _) = get(app, "/catalog.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_and_spa_fallback() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX.as_bytes());

        let (status, body) = get(app, "/courses/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX.as_bytes());
    }
}
