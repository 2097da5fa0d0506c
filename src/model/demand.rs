use crate::model::generator::{Constant, Generator};

/// A stream of customer orders placed against one facility.
#[derive(Debug)]
pub struct DemandStream {
    pub id: String,
    pub name: String,
    /// Index of the facility the orders are placed on.
    pub target: usize,
    /// Time between consecutive orders.
    pub arrival: Box<dyn Generator<f64>>,
    /// Units per order.
    pub quantity: Box<dyn Generator<u64>>,
    /// Cost charged for each order shipped to the customer.
    pub delivery_cost: f64,
    /// Time from shipment until the customer receives the order.
    pub lead_time: f64,
}

/// Fixed parameters of a constant demand stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandProfile {
    pub arrival_interval: f64,
    pub order_quantity: u64,
    pub delivery_cost: f64,
    pub lead_time: f64,
}

impl DemandStream {
    /// Builds a stream with constant arrival and order-size generators.
    pub fn constant(
        id: impl Into<String>,
        name: impl Into<String>,
        target: usize,
        profile: DemandProfile,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target,
            arrival: Box::new(Constant::new(profile.arrival_interval)),
            quantity: Box::new(Constant::new(profile.order_quantity)),
            delivery_cost: profile.delivery_cost,
            lead_time: profile.lead_time,
        }
    }
}
