// src/simulation/config.rs

/// Horizon used when a request does not set `sim_time`.
pub const DEFAULT_SIM_TIME: u64 = 30;

// Distributor defaults.
pub const DEFAULT_CAPACITY: u64 = 1000;
pub const DEFAULT_HOLDING_COST: f64 = 0.22;
pub const DEFAULT_BUY_PRICE: f64 = 150.0;
pub const DEFAULT_SELL_PRICE: f64 = 300.0;

// (s, S) defaults.
pub const DEFAULT_SS_REORDER_POINT: u64 = 400;
pub const DEFAULT_SS_ORDER_UP_TO: u64 = 1000;

// (R, Q) defaults.
pub const DEFAULT_RQ_REVIEW_INTERVAL: f64 = 1000.0;
pub const DEFAULT_RQ_ORDER_QUANTITY: u64 = 500;

// Link and demand defaults.
pub const DEFAULT_LINK_COST: f64 = 10.0;
pub const DEFAULT_LINK_LEAD_TIME: f64 = 5.0;
pub const DEFAULT_ARRIVAL_INTERVAL: f64 = 1.0;
pub const DEFAULT_ORDER_QUANTITY: u64 = 400;
pub const DEFAULT_DELIVERY_COST: f64 = 10.0;
pub const DEFAULT_DEMAND_LEAD_TIME: f64 = 5.0;

/// Largest capacity, stock level or order size the engine accepts. Leaves
/// headroom so positions and running totals stay within `i64`.
pub const MAX_UNITS: u64 = (i64::MAX / 4) as u64;

/// Per-run settings passed into the engine.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub horizon: u64,
    /// Emit a debug event for every processed simulation event.
    pub log_events: bool,
}

impl RunOptions {
    pub fn new(horizon: u64) -> Self {
        Self {
            horizon,
            log_events: false,
        }
    }

    pub fn with_event_logging(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SIM_TIME)
    }
}
