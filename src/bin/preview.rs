//! Tandem Preview Server
//!
//! Run with: cargo run --bin tandem-preview
//!
//! Serves the built UI bundle plus the content snapshot on a local port.
//!
//! # Configuration
//!
//! Read from the standard config locations (see `tandem config`), then
//! environment variables:
//! - `TANDEM_PREVIEW_HOST`: Host to bind to (default: 127.0.0.1)
//! - `TANDEM_PREVIEW_PORT`: Port to listen on (default: 8084)
//! - `TANDEM_DIST_DIR`: Built UI bundle (default: tandem-ui/dist)
//! - `TANDEM_LOG_LEVEL`, `TANDEM_LOG_FORMAT`, `RUST_LOG`: Logging

use tandem::config::Config;
use tandem::logging::init_tracing;
use tandem::preview::{serve, PreviewState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = Config::resolve(None)?;
    init_tracing(&config.logging);
    source.log();

    tracing::info!("Starting Tandem preview v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Bundle directory: {:?}", config.preview.dist_dir);

    let state = PreviewState::new(config.preview)?;
    serve(state).await?;

    Ok(())
}
