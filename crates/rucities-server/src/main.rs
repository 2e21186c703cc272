//! rucities HTTP server
//!
//! Run with: `cargo run -p rucities-server -- --dataset RU.txt`

use clap::Parser;
use rucities_server::{init_logging, RuCitiesServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig::parse();
    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dataset = %config.dataset.display(),
        addr = %config.listen,
        max_page_size = config.max_page_size,
        snapshot = !config.no_snapshot,
        "Starting rucities server"
    );

    // The store is built once, before any request is accepted.
    let server = tokio::task::spawn_blocking(move || RuCitiesServer::new(config)).await??;
    server.run().await?;
    Ok(())
}
