//! ClassScope UI Server
//!
//! Run with: cargo run --bin classscope-server
//!
//! Serves the built UI (`trunk build` output of `classscope-ui`).
//!
//! # Configuration
//!
//! Read from the standard config locations, then environment variables:
//! - `CLASSSCOPE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CLASSSCOPE_PORT`: Port to listen on (default: 8080)
//! - `CLASSSCOPE_STATIC_DIR`: Built UI directory (default: classscope-ui/dist)
//! - `CLASSSCOPE_API_URL`: Review API URL handed to the UI
//! - `CLASSSCOPE_CATALOG_CSV`: CSV catalog served to the UI
//! - `RUST_LOG`: Log filter (default: classscope=info,tower_http=debug)

use classscope::config::Config;
use classscope::logging::init_logging;
use classscope::server::{serve, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Starting ClassScope UI server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Review API: {}", config.api.base_url);

    let catalog = config.catalog.load_catalog()?;
    tracing::info!("Catalog loaded: {} courses", catalog.len());

    let state = ServerState::new(config, catalog);
    if !state.index_path().is_file() {
        tracing::warn!(
            "No index.html in {:?}; build the UI first (trunk build --release)",
            state.static_dir()
        );
    }

    serve(state).await?;

    tracing::info!("ClassScope UI server stopped");
    Ok(())
}
