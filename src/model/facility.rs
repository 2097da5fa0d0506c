use serde::Serialize;
use std::collections::VecDeque;

use crate::strategy::traits::{InventoryPosition, ReplenishmentPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityRole {
    Supplier,
    Distributor,
}

/// One point of a facility's inventory-level time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelSample {
    pub time: f64,
    pub level: u64,
}

/// An order that could not be filled from stock when it arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backorder {
    /// A customer order from demand stream `demand`.
    Customer { demand: usize, quantity: u64 },
    /// A replenishment order placed by the sink of `link`.
    Site { link: usize, quantity: u64 },
}

impl Backorder {
    pub fn quantity(&self) -> u64 {
        match self {
            Backorder::Customer { quantity, .. } | Backorder::Site { quantity, .. } => *quantity,
        }
    }
}

/// What happened to an arriving shipment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    /// Backorders filled from the arrival, oldest first.
    pub released: Vec<Backorder>,
    /// Units that found no room in stock.
    pub discarded: u64,
}

/// A source that can ship any quantity at any time.
#[derive(Debug, Clone)]
pub struct SupplierNode {
    pub id: String,
    pub name: String,
}

impl SupplierNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A capacity-bounded site that holds stock and reorders through its policy.
#[derive(Debug)]
pub struct InventoryNode {
    pub id: String,
    pub name: String,

    pub capacity: u64,
    pub initial_level: u64,
    pub level: u64,
    pub on_order: u64,

    pub holding_cost: f64,
    pub buy_price: f64,
    pub sell_price: f64,

    pub policy: Box<dyn ReplenishmentPolicy>,

    pub backlog: VecDeque<Backorder>,
    history: Vec<LevelSample>,
    // Integral of level over time, for holding cost and average stock.
    level_area: f64,
    last_change: f64,
}

/// Operational settings of an inventory node, already defaulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySettings {
    pub capacity: u64,
    pub initial_level: u64,
    pub holding_cost: f64,
    pub buy_price: f64,
    pub sell_price: f64,
}

impl InventoryNode {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        settings: InventorySettings,
        policy: Box<dyn ReplenishmentPolicy>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity: settings.capacity,
            initial_level: settings.initial_level,
            level: settings.initial_level,
            on_order: 0,
            holding_cost: settings.holding_cost,
            buy_price: settings.buy_price,
            sell_price: settings.sell_price,
            policy,
            backlog: VecDeque::new(),
            history: Vec::new(),
            level_area: 0.0,
            last_change: 0.0,
        }
    }

    /// Clears run state and records the opening level at `t = 0`.
    pub fn reset(&mut self) {
        self.level = self.initial_level;
        self.on_order = 0;
        self.backlog.clear();
        self.history = vec![LevelSample {
            time: 0.0,
            level: self.level,
        }];
        self.level_area = 0.0;
        self.last_change = 0.0;
    }

    pub fn history(&self) -> &[LevelSample] {
        &self.history
    }

    pub fn position(&self) -> InventoryPosition {
        InventoryPosition {
            on_hand: self.level,
            on_order: self.on_order,
            backordered: self
                .backlog
                .iter()
                .fold(0u64, |owed, order| owed.saturating_add(order.quantity())),
            capacity: self.capacity,
        }
    }

    /// Accumulates level-time up to `time` without changing the level.
    pub fn advance_to(&mut self, time: f64) {
        if time > self.last_change {
            self.level_area += self.level as f64 * (time - self.last_change);
            self.last_change = time;
        }
    }

    /// Total level-time accumulated so far.
    pub fn level_area(&self) -> f64 {
        self.level_area
    }

    /// Takes `quantity` out of stock if it is all there.
    pub fn withdraw(&mut self, time: f64, quantity: u64) -> bool {
        if self.level < quantity {
            return false;
        }
        self.set_level(time, self.level - quantity);
        true
    }

    /// Takes in an arriving shipment.
    ///
    /// Waiting orders are released FIFO from on-hand stock plus the arrival
    /// before the remainder is capped at capacity.
    pub fn receive_shipment(&mut self, time: f64, quantity: u64) -> Receipt {
        self.on_order = self.on_order.saturating_sub(quantity);
        let mut available = self.level.saturating_add(quantity);
        let mut released = Vec::new();
        while let Some(order) = self.backlog.front() {
            if order.quantity() > available {
                break;
            }
            available -= order.quantity();
            released.extend(self.backlog.pop_front());
        }
        let level = available.min(self.capacity);
        self.set_level(time, level);
        Receipt {
            released,
            discarded: available - level,
        }
    }

    fn set_level(&mut self, time: f64, level: u64) {
        self.advance_to(time);
        self.level = level;
        self.history.push(LevelSample { time, level });
    }
}

/// A network node as the engine sees it.
#[derive(Debug)]
pub enum Facility {
    Supplier(SupplierNode),
    Inventory(InventoryNode),
}

impl Facility {
    pub fn id(&self) -> &str {
        match self {
            Facility::Supplier(node) => &node.id,
            Facility::Inventory(node) => &node.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Facility::Supplier(node) => &node.name,
            Facility::Inventory(node) => &node.name,
        }
    }

    pub fn role(&self) -> FacilityRole {
        match self {
            Facility::Supplier(_) => FacilityRole::Supplier,
            Facility::Inventory(_) => FacilityRole::Distributor,
        }
    }

    /// Engine label for the node type.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Facility::Supplier(_) => "infinite_supplier",
            Facility::Inventory(_) => "distributor",
        }
    }

    /// The recorded inventory levels, or `None` for facilities without stock.
    pub fn inventory_history(&self) -> Option<&[LevelSample]> {
        match self {
            Facility::Supplier(_) => None,
            Facility::Inventory(node) => Some(node.history()),
        }
    }

    pub fn as_inventory(&self) -> Option<&InventoryNode> {
        match self {
            Facility::Inventory(node) => Some(node),
            Facility::Supplier(_) => None,
        }
    }

    pub fn as_inventory_mut(&mut self) -> Option<&mut InventoryNode> {
        match self {
            Facility::Inventory(node) => Some(node),
            Facility::Supplier(_) => None,
        }
    }
}
