//! HTTP API for running simulations.
//!
//! - `GET /` - service banner with version and endpoint list
//! - `GET /health` - liveness check
//! - `POST /simulate` - run a network description, returning metrics and
//!   inventory series, or `{success: false, error}` with status 400 for a
//!   request that references unknown nodes and 500 for an engine failure

mod handlers;
mod routes;
mod types;

use std::sync::Arc;

use crate::config::ServerConfig;

pub use handlers::ApiError;
pub use routes::create_router;
pub use types::{HealthResponse, RootResponse, SimulationResponse, SERVICE_VERSION};

/// Shared state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
