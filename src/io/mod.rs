pub mod reporting;
pub mod schema;

pub use reporting::{extract_inventory, write_inventory_csv, InventoryData, InventorySeries, MetricsBundle};
pub use schema::{DemandConfig, LinkConfig, NodeConfig, SimulationRequest};
