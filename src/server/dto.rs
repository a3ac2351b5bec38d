//! Response bodies of the server's JSON endpoints

use serde::{Deserialize, Serialize};

/// `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" when `index.html` is present, otherwise "missing"
    pub assets: String,
    pub catalog_courses: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// `GET /app-config.json`, read by the UI at startup
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigResponse {
    pub api_base_url: String,
    pub school: String,
    pub institution: String,
}
