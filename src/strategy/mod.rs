pub mod implementations;
pub mod traits;

pub use implementations::{RQReplenishment, SSReplenishment};
pub use traits::{InventoryPosition, PolicyParameters, ReplenishmentPolicy, Review};
