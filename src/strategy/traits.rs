// src/strategy/traits.rs

use std::fmt::Debug;

/// Inventory state handed to a policy when it is asked to reorder.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InventoryPosition {
    /// Current on-hand stock.
    pub on_hand: u64,
    /// Goods ordered upstream but not yet arrived.
    pub on_order: u64,
    /// Units owed to waiting customers and sites.
    pub backordered: u64,
    /// Storage capacity of the facility.
    pub capacity: u64,
}

impl InventoryPosition {
    /// On-hand plus on-order minus backorders; negative when more is owed
    /// than held or inbound.
    pub fn position(&self) -> i64 {
        signed(self.on_hand)
            .saturating_add(signed(self.on_order))
            .saturating_sub(signed(self.backordered))
    }
}

/// Widens a unit count to `i64`, clamping at `i64::MAX`.
pub fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// When a policy gets to look at the inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Review {
    /// After every stock withdrawal.
    Continuous,
    /// Every `interval` time units, starting at `t = interval`.
    Periodic { interval: f64 },
}

/// The configured parameters of a policy, as the engine received them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolicyParameters {
    /// (s, S): reorder point and order-up-to level.
    ReorderPoint { s: u64, big_s: u64 },
    /// (R, Q): review interval and fixed order quantity.
    PeriodicReview { r: f64, q: u64 },
}

/// Decides when and how much an inventory facility reorders upstream.
///
/// `Send + Sync` lets a built network move onto a blocking worker thread.
pub trait ReplenishmentPolicy: Debug + Send + Sync {
    /// Short policy tag, `"SS"` or `"RQ"`.
    fn kind(&self) -> &'static str;

    fn review(&self) -> Review;

    fn parameters(&self) -> PolicyParameters;

    /// Rejects parameter combinations the engine cannot run.
    fn check(&self) -> Result<(), String>;

    /// Quantity to order now; zero means no order.
    fn order_quantity(&mut self, state: &InventoryPosition) -> u64;
}
