//! Response bodies for the HTTP API.

use serde::Serialize;

use crate::io::reporting::{InventoryData, MetricsBundle};
use crate::simulation::orchestrator::SimulationOutcome;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "SupplyNet simulation API".to_string(),
            status: "running".to_string(),
            version: SERVICE_VERSION.to_string(),
            endpoints: vec!["/simulate".to_string(), "/health".to_string()],
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine_availability: String,
    pub engine_version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            engine_availability: "available".to_string(),
            engine_version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Body of `POST /simulate`, for success and failure alike.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_data: Option<InventoryData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SimulationResponse {
    pub fn success(outcome: SimulationOutcome) -> Self {
        Self {
            success: true,
            metrics: Some(outcome.metrics),
            inventory_data: Some(outcome.inventory_data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            metrics: None,
            inventory_data: None,
            error: Some(error.into()),
        }
    }
}
