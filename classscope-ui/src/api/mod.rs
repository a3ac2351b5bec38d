//! Backend access
//!
//! The review API goes through [`BrowserClient`]. The UI server adds two
//! small JSON files next to the app: `/app-config.json` (API base URL and
//! school) and `/catalog.json` (the school's course catalog). Both are
//! optional; without them the built-in defaults apply.

pub mod client;

pub use client::BrowserClient;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use classscope::api::{normalize_base, DEFAULT_API_BASE};
use classscope::catalog::Institution;

/// localStorage key overriding the review API base URL
pub const API_URL_KEY: &str = "classscope_api_url";

/// Settings published by `classscope-server`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub school: String,
    pub institution: String,
}

/// API base URL saved in local storage, if any
pub fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(API_URL_KEY)
        .ok()?
        .filter(|url| !url.trim().is_empty())
}

/// A stored override wins over the server's config, which wins over the default
pub fn resolve_api_base(stored: Option<&str>, config: Option<&AppConfig>) -> String {
    let base = stored
        .or(config.map(|c| c.api_base_url.as_str()))
        .unwrap_or(DEFAULT_API_BASE);
    normalize_base(base)
}

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", path, response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn fetch_app_config() -> Result<AppConfig, String> {
    fetch_json("/app-config.json").await
}

pub async fn fetch_catalog() -> Result<Institution, String> {
    fetch_json("/catalog.json").await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> AppConfig {
        AppConfig {
            api_base_url: url.to_string(),
            school: "University of North Carolina at Chapel Hill".to_string(),
            institution: "uncch".to_string(),
        }
    }

    #[test]
    fn test_stored_override_wins() {
        let cfg = config("http://api.example.com");
        assert_eq!(
            resolve_api_base(Some("http://localhost:9000/"), Some(&cfg)),
            "http://localhost:9000"
        );
    }

    #[test]
    fn test_server_config_then_default() {
        let cfg = config("http://api.example.com/");
        assert_eq!(resolve_api_base(None, Some(&cfg)), "http://api.example.com");
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
    }

    #[test]
    fn test_app_config_wire_format() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{"apiBaseUrl":"http://127.0.0.1:8000","school":"Duke","institution":"duke"}"#,
        )
        .unwrap();
        assert_eq!(cfg.institution, "duke");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_stored_api_base_round_trip() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();

        storage.set_item(API_URL_KEY, "http://localhost:9000").unwrap();
        assert_eq!(stored_api_base().as_deref(), Some("http://localhost:9000"));

        storage.set_item(API_URL_KEY, "  ").unwrap();
        assert_eq!(stored_api_base(), None);

        storage.remove_item(API_URL_KEY).unwrap();
        assert_eq!(stored_api_base(), None);
    }
}
