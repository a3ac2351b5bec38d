//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;
use crate::catalog::{self, Catalog, CatalogCsvImporter, CatalogError, DEFAULT_SCHOOL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Review API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Course catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// School name sent with every API request
    #[serde(default = "default_school")]
    pub school: String,

    /// Catalog key; derived from `school` when unset
    #[serde(default)]
    pub institution: Option<String>,

    /// CSV file replacing the built-in catalog
    #[serde(default)]
    pub csv_path: Option<String>,
}

fn default_school() -> String {
    DEFAULT_SCHOOL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            school: default_school(),
            institution: None,
            csv_path: None,
        }
    }
}

impl CatalogConfig {
    /// Catalog key of the configured school
    pub fn institution_key(&self) -> String {
        self.institution
            .clone()
            .unwrap_or_else(|| catalog::institution_key(&self.school))
    }

    /// The configured catalog: the CSV file if set, otherwise the built-in one
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.csv_path {
            Some(path) => {
                let result = CatalogCsvImporter::new(self.institution_key())
                    .import_file(Path::new(path))?;
                for error in &result.errors {
                    tracing::warn!(path = %path, "Skipped catalog row: {}", error);
                }
                Ok(result.catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}

/// Static UI server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI (`index.html` and assets)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "classscope-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: vec![
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("classscope").join("config.toml")),
            Some(PathBuf::from("/etc/classscope/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `CLASSSCOPE_*` environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("CLASSSCOPE_API_URL") {
            self.api.base_url = url;
        }

        if let Some(school) = var("CLASSSCOPE_SCHOOL") {
            self.catalog.school = school;
        }
        if let Some(path) = var("CLASSSCOPE_CATALOG_CSV") {
            self.catalog.csv_path = Some(path);
        }

        if let Some(host) = var("CLASSSCOPE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("CLASSSCOPE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = var("CLASSSCOPE_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        if let Some(level) = var("CLASSSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("CLASSSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# ClassScope Configuration
#
# Environment variables override these settings:
# - CLASSSCOPE_API_URL
# - CLASSSCOPE_SCHOOL
# - CLASSSCOPE_CATALOG_CSV
# - CLASSSCOPE_HOST
# - CLASSSCOPE_PORT
# - CLASSSCOPE_STATIC_DIR
# - CLASSSCOPE_LOG_LEVEL
# - CLASSSCOPE_LOG_FORMAT

[api]
# Review API base URL
base_url = "http://127.0.0.1:8000"

# Request timeout in seconds
timeout_secs = 30

[catalog]
# School sent with course lookups and reviews
school = "University of North Carolina at Chapel Hill"

# Catalog key (derived from the school when omitted)
# institution = "uncch"

# CSV file replacing the built-in course catalog
# csv_path = "/etc/classscope/catalog.csv"

[server]
# Static UI server host
host = "0.0.0.0"

# Static UI server port
port = 8080

# Directory with the built UI
static_dir = "classscope-ui/dist"

# Allowed CORS origins
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
