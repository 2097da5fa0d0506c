// src/io/reporting.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ReportError;
use crate::simulation::engine::Network;
use crate::simulation::statistics::{NetworkStatistics, PairCount};

/// Aggregate metrics as they appear in a response.
///
/// Every key is always present. A missing statistic falls back to `0`,
/// `0.0` or `[0, 0]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsBundle {
    pub profit: f64,
    pub revenue: f64,
    pub total_cost: f64,
    pub inventory_carry_cost: f64,
    pub inventory_spend_cost: f64,
    pub transportation_cost: f64,
    pub available_inv: u64,
    pub avg_available_inv: f64,
    pub total_demand: PairCount,
    pub demand_by_customers: PairCount,
    pub demand_by_site: PairCount,
    pub shortage: PairCount,
    pub backorders: PairCount,
    pub fulfillment_received_by_customers: PairCount,
    pub fulfillment_received_by_site: PairCount,
    pub total_fulfillment_received: PairCount,
    pub avg_cost_per_order: f64,
    pub avg_cost_per_item: f64,
    pub num_of_nodes: u64,
    pub num_of_links: u64,
    pub num_suppliers: u64,
    pub num_distributors: u64,
    pub num_manufacturers: u64,
    pub num_retailers: u64,
}

impl MetricsBundle {
    pub fn from_statistics(statistics: Option<&NetworkStatistics>) -> Self {
        statistics.map(Self::from).unwrap_or_default()
    }
}

impl From<&NetworkStatistics> for MetricsBundle {
    fn from(stats: &NetworkStatistics) -> Self {
        Self {
            profit: stats.profit,
            revenue: stats.revenue,
            total_cost: stats.total_cost,
            inventory_carry_cost: stats.inventory_carry_cost,
            inventory_spend_cost: stats.inventory_spend_cost,
            transportation_cost: stats.transportation_cost,
            available_inv: stats.available_inv,
            avg_available_inv: stats.avg_available_inv,
            total_demand: stats.total_demand,
            demand_by_customers: stats.demand_by_customers,
            demand_by_site: stats.demand_by_site,
            shortage: stats.shortage,
            backorders: stats.backorders,
            fulfillment_received_by_customers: stats.fulfillment_received_by_customers,
            fulfillment_received_by_site: stats.fulfillment_received_by_site,
            total_fulfillment_received: stats.total_fulfillment_received,
            avg_cost_per_order: stats.avg_cost_per_order,
            avg_cost_per_item: stats.avg_cost_per_item,
            num_of_nodes: stats.num_of_nodes,
            num_of_links: stats.num_of_links,
            num_suppliers: stats.num_suppliers,
            num_distributors: stats.num_distributors,
            num_manufacturers: stats.num_manufacturers,
            num_retailers: stats.num_retailers,
        }
    }
}

/// Inventory level over time for one facility. Both vectors have equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySeries {
    pub time: Vec<f64>,
    pub level: Vec<u64>,
}

impl InventorySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Series keyed by facility id, in id order.
pub type InventoryData = BTreeMap<String, InventorySeries>;

/// One row of the CSV export.
#[derive(Debug, Serialize)]
struct InventoryRow<'a> {
    facility_id: &'a str,
    time: f64,
    level: u64,
}

/// True for kind labels that denote an unlimited supply source.
pub fn is_unlimited_supply(kind_label: &str) -> bool {
    let label = kind_label.to_ascii_lowercase();
    label.contains("infinite") || label == "supplier"
}

/// Collects the level history of every stock-holding facility.
///
/// Unlimited suppliers, facilities without a history and facilities whose
/// history is empty are left out.
pub fn extract_inventory(network: &Network) -> InventoryData {
    let mut data = InventoryData::new();
    for facility in network.facilities() {
        if is_unlimited_supply(facility.kind_label()) {
            continue;
        }
        let Some(history) = facility.inventory_history() else {
            debug!(facility = facility.id(), "facility keeps no inventory history");
            continue;
        };
        if history.is_empty() {
            debug!(facility = facility.id(), "inventory history is empty");
            continue;
        }
        let series = InventorySeries {
            time: history.iter().map(|sample| sample.time).collect(),
            level: history.iter().map(|sample| sample.level).collect(),
        };
        data.insert(facility.id().to_string(), series);
    }
    data
}

/// Writes every inventory series to a CSV file, one row per sample.
///
/// # Arguments
/// * `file_path` - Destination file; created or truncated.
/// * `data` - Series keyed by facility id.
pub fn write_inventory_csv(file_path: impl AsRef<Path>, data: &InventoryData) -> Result<(), ReportError> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    let mut rows = 0;
    for (facility_id, series) in data {
        for (&time, &level) in series.time.iter().zip(&series.level) {
            wtr.serialize(InventoryRow {
                facility_id,
                time,
                level,
            })?;
            rows += 1;
        }
    }
    wtr.flush()?;

    info!(rows, path = %path.display(), "exported inventory series");
    Ok(())
}
