pub mod calendar;
pub mod demand;
pub mod facility;
pub mod generator;
pub mod link;

pub use demand::{DemandProfile, DemandStream};
pub use facility::{Facility, FacilityRole, InventoryNode, InventorySettings, LevelSample, Receipt, SupplierNode};
pub use generator::{Constant, Generator};
pub use link::Link;
