// src/strategy/implementations.rs

use crate::strategy::traits::{signed, InventoryPosition, PolicyParameters, ReplenishmentPolicy, Review};

// =========================================================================
// 1. (s, S) Policy
// =========================================================================

/// Continuous-review reorder-point policy.
///
/// Whenever the inventory position drops to `s` or below, order enough to
/// bring it back up to `S`.
#[derive(Debug, Clone)]
pub struct SSReplenishment {
    s: u64,
    big_s: u64,
}

impl SSReplenishment {
    pub fn new(s: u64, big_s: u64) -> Self {
        Self { s, big_s }
    }
}

impl ReplenishmentPolicy for SSReplenishment {
    fn kind(&self) -> &'static str {
        "SS"
    }

    fn review(&self) -> Review {
        Review::Continuous
    }

    fn parameters(&self) -> PolicyParameters {
        PolicyParameters::ReorderPoint {
            s: self.s,
            big_s: self.big_s,
        }
    }

    fn check(&self) -> Result<(), String> {
        if self.s >= self.big_s {
            return Err(format!(
                "reorder point s={} must be below order-up-to level S={}",
                self.s, self.big_s
            ));
        }
        Ok(())
    }

    fn order_quantity(&mut self, state: &InventoryPosition) -> u64 {
        let position = state.position();
        if position <= signed(self.s) {
            u64::try_from(signed(self.big_s).saturating_sub(position)).unwrap_or(0)
        } else {
            0
        }
    }
}

// =========================================================================
// 2. (R, Q) Policy
// =========================================================================

/// Periodic-review fixed-quantity policy.
///
/// Every `R` time units, order `Q` units unless the position already fills
/// the facility.
#[derive(Debug, Clone)]
pub struct RQReplenishment {
    r: f64,
    q: u64,
}

impl RQReplenishment {
    pub fn new(r: f64, q: u64) -> Self {
        Self { r, q }
    }
}

impl ReplenishmentPolicy for RQReplenishment {
    fn kind(&self) -> &'static str {
        "RQ"
    }

    fn review(&self) -> Review {
        Review::Periodic { interval: self.r }
    }

    fn parameters(&self) -> PolicyParameters {
        PolicyParameters::PeriodicReview {
            r: self.r,
            q: self.q,
        }
    }

    fn check(&self) -> Result<(), String> {
        if !self.r.is_finite() || self.r <= 0.0 {
            return Err(format!("review interval R={} must be positive", self.r));
        }
        if self.q == 0 {
            return Err("order quantity Q must be positive".to_string());
        }
        Ok(())
    }

    fn order_quantity(&mut self, state: &InventoryPosition) -> u64 {
        if state.position() < signed(state.capacity) {
            self.q
        } else {
            0
        }
    }
}
