pub mod builder;
pub mod config;
pub mod engine;
pub mod orchestrator;
pub mod statistics;

pub use builder::{build_network, NetworkParts};
pub use config::RunOptions;
pub use engine::Network;
pub use orchestrator::{simulate, simulate_request, SimulationOutcome};
pub use statistics::{NetworkStatistics, PairCount};
