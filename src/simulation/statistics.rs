use serde::Serialize;

/// A `(count, quantity)` counter, serialized as a two-element array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PairCount(pub u64, pub u64);

impl PairCount {
    pub fn record(&mut self, quantity: u64) {
        self.0 = self.0.saturating_add(1);
        self.1 = self.1.saturating_add(quantity);
    }

    pub fn count(&self) -> u64 {
        self.0
    }

    pub fn quantity(&self) -> u64 {
        self.1
    }

    pub fn combined(self, other: PairCount) -> PairCount {
        PairCount(self.0.saturating_add(other.0), self.1.saturating_add(other.1))
    }
}

/// Aggregate counters the engine computes at the end of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStatistics {
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

/// Running totals collected while events are processed.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tally {
    pub revenue: f64,
    pub spend_cost: f64,
    pub transportation_cost: f64,
    pub demand_by_customers: PairCount,
    pub demand_by_site: PairCount,
    pub shortage: PairCount,
    pub backorders: PairCount,
    pub fulfillment_received_by_customers: PairCount,
    pub fulfillment_received_by_site: PairCount,
}
