//! rucities HTTP Server
//!
//! A thin HTTP wrapper around `rucities-core`. Every endpoint is a GET with
//! query-string parameters and answers with `{"status": ..., "message": ...}`.
//!
//! # Endpoints
//!
//! - `GET /api/v1/info_by_id?id=524901` - place by GeoNames id
//! - `GET /api/v1/cities_page?page=1&count=20` - one page of places
//! - `GET /api/v1/compare?city1=Москва&city2=Омск` - northern city, timezone match
//! - `GET /api/v1/city?name=Москва` - resolve a single name
//! - `GET /api/v1/search?q=novosib&limit=10` - substring search
//! - `GET /api/v1/stats` - dataset summary
//!
//! # Example
//!
//! ```ignore
//! use rucities_server::{RuCitiesServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = RuCitiesServer::new(ServerConfig::default()).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
pub use telemetry::init_logging;

use axum::Router;
use rucities_core::DefaultStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// rucities HTTP Server
pub struct RuCitiesServer {
    /// Application state
    state: Arc<AppState>,
    /// Configured router
    router: Router,
}

impl RuCitiesServer {
    /// Load the dataset named in `config` and prepare the router.
    ///
    /// This blocks while the dataset is parsed; run it before serving.
    pub fn new(config: ServerConfig) -> rucities_core::Result<Self> {
        let store = if config.no_snapshot {
            DefaultStore::load_from_path(&config.dataset)?
        } else {
            DefaultStore::load_cached(&config.dataset)?
        };
        Ok(Self::with_store(store, config))
    }

    /// Serve an already-built store.
    pub fn with_store(store: DefaultStore, config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(store, config));
        let router = routes::build_router(state.clone());
        Self { state, router }
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let addr = self.state.config.listen;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            records = self.state.store.size(),
            "rucities server listening"
        );

        axum::serve(listener, self.router).await
    }
}
