use crate::model::generator::{Constant, Generator};

/// A directed transport lane from `source` to `sink`.
///
/// Endpoints are indices into the owning network's facility list.
#[derive(Debug)]
pub struct Link {
    pub id: String,
    pub source: usize,
    pub sink: usize,
    /// Flat cost charged per shipment.
    pub cost: f64,
    pub lead_time: Box<dyn Generator<f64>>,
}

impl Link {
    pub fn new(id: impl Into<String>, source: usize, sink: usize, cost: f64, lead_time: f64) -> Self {
        Self {
            id: id.into(),
            source,
            sink,
            cost,
            lead_time: Box::new(Constant::new(lead_time)),
        }
    }
}
