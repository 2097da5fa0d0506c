//! Supply-chain network simulation service.
//!
//! A request describes facilities, transport links and customer demand
//! streams. [`simulation::builder`] turns it into engine objects,
//! [`simulation::engine`] runs them over a fixed horizon and
//! [`io::reporting`] reads out metrics and inventory series.

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{BuildError, EngineError, ReportError, SimulationError};
pub use io::schema::SimulationRequest;
pub use simulation::orchestrator::{simulate, simulate_request, SimulationOutcome};
