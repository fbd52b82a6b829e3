//! livetemp — a live-updating temperature dashboard served as one page.
//!
//! Run with:  `RUST_LOG=info livetemp`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("livetemp v{} starting", env!("CARGO_PKG_VERSION"));

    livetemp_server::run().await.map_err(Into::into)
}
