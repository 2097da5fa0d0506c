// src/simulation/orchestrator.rs

use tracing::{info, info_span, warn};

use crate::error::SimulationError;
use crate::io::reporting::{extract_inventory, InventoryData, MetricsBundle};
use crate::io::schema::SimulationRequest;
use crate::simulation::builder::build_network;
use crate::simulation::config::RunOptions;

/// Everything a successful run hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub metrics: MetricsBundle,
    pub inventory_data: InventoryData,
}

/// Builds, runs and reads out one request.
///
/// The horizon and logging choice come from `options`; the request's own
/// `sim_time` is not consulted here. Nothing is retried.
pub fn simulate(
    request: &SimulationRequest,
    options: &RunOptions,
) -> Result<SimulationOutcome, SimulationError> {
    let span = info_span!(
        "simulation",
        nodes = request.nodes.len(),
        links = request.links.len(),
        demands = request.demands.len(),
        horizon = options.horizon,
    );
    let _enter = span.enter();

    let parts = build_network(request).inspect_err(|err| warn!(%err, "rejected network"))?;
    let mut network = parts.assemble()?;
    network.simulate(options)?;

    let metrics = MetricsBundle::from_statistics(network.statistics());
    let inventory_data = extract_inventory(&network);
    info!(
        profit = metrics.profit,
        series = inventory_data.len(),
        "simulation complete"
    );

    Ok(SimulationOutcome {
        metrics,
        inventory_data,
    })
}

/// Runs a request over its own `sim_time`.
pub fn simulate_request(
    request: &SimulationRequest,
    log_events: bool,
) -> Result<SimulationOutcome, SimulationError> {
    let options = RunOptions::new(request.sim_time).with_event_logging(log_events);
    simulate(request, &options)
}
