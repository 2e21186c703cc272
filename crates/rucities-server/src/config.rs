//! Server configuration, from CLI flags with environment fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// rucities HTTP server
#[derive(Parser, Debug, Clone)]
#[command(name = "rucities-server", version)]
#[command(about = "HTTP API over the GeoNames index of Russian places")]
pub struct ServerConfig {
    /// GeoNames dump (RU.txt, RU.txt.gz) or a .bin snapshot
    #[arg(long, default_value = "RU.txt", env = "RUCITIES_DATASET")]
    pub dataset: PathBuf,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8000", env = "RUCITIES_LISTEN")]
    pub listen: SocketAddr,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", env = "RUCITIES_LOG_LEVEL")]
    pub log_level: String,

    /// Largest accepted `count` for paging and `limit` for search (0 = no cap)
    #[arg(long, default_value_t = 1000, env = "RUCITIES_MAX_PAGE_SIZE")]
    pub max_page_size: usize,

    /// Always parse the dataset; don't read or write a snapshot next to it
    #[arg(long, env = "RUCITIES_NO_SNAPSHOT")]
    pub no_snapshot: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("RU.txt"),
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_level: "info".to_string(),
            max_page_size: 1000,
            no_snapshot: false,
        }
    }
}

impl ServerConfig {
    /// Applies `max_page_size` to a requested size; `None` means over the cap.
    pub fn check_page_size(&self, requested: usize) -> Option<usize> {
        if self.max_page_size == 0 || requested <= self.max_page_size {
            Some(requested)
        } else {
            None
        }
    }
}
