//! Tracing setup for the native binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when neither `RUST_LOG` nor the config set one
pub const DEFAULT_FILTER: &str = "classscope=info,tower_http=debug";

/// Build the env filter: `RUST_LOG` wins, then `[logging] level`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.level.trim().is_empty() {
            EnvFilter::new(DEFAULT_FILTER)
        } else {
            EnvFilter::new(format!("classscope={},tower_http=debug", config.level.trim()))
        }
    })
}

/// Install the global subscriber
///
/// `format = "json"` emits one JSON object per line; anything else uses
/// the human-readable formatter. Calling this twice is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let json = config.format.eq_ignore_ascii_case("json");

    let pretty_layer = (!json).then(tracing_subscriber::fmt::layer);
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json());

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(pretty_layer)
        .with(json_layer)
        .try_init();
}
