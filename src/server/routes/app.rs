//! UI bootstrap routes
//!
//! - GET /app-config.json - review API base URL and school for the UI
//! - GET /catalog.json - the course catalog of the configured school

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::catalog::Institution;
use crate::server::dto::AppConfigResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::ServerState;

/// GET /app-config.json
pub async fn app_config(State(state): State<Arc<ServerState>>) -> Json<AppConfigResponse> {
    let config = &state.config;
    Json(AppConfigResponse {
        api_base_url: crate::api::normalize_base(&config.api.base_url),
        school: config.catalog.school.clone(),
        institution: config.catalog.institution_key(),
    })
}

/// GET /catalog.json
pub async fn catalog(State(state): State<Arc<ServerState>>) -> ServerResult<Json<Institution>> {
    let key = state.config.catalog.institution_key();
    state
        .catalog
        .institution(&key)
        .cloned()
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("No catalog for institution '{}'", key)))
}
