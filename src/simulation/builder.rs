// src/simulation/builder.rs

use std::collections::HashMap;

use crate::error::{BuildError, EngineError};
use crate::io::schema::{DemandConfig, LinkConfig, NodeConfig, NodeKind, PolicyKind, SimulationRequest};
use crate::model::demand::{DemandProfile, DemandStream};
use crate::model::facility::{Facility, InventoryNode, InventorySettings, SupplierNode};
use crate::model::link::Link;
use crate::simulation::config::{
    DEFAULT_BUY_PRICE, DEFAULT_CAPACITY, DEFAULT_RQ_ORDER_QUANTITY, DEFAULT_RQ_REVIEW_INTERVAL,
    DEFAULT_SELL_PRICE, DEFAULT_SS_ORDER_UP_TO, DEFAULT_SS_REORDER_POINT,
};
use crate::simulation::engine::Network;
use crate::strategy::implementations::{RQReplenishment, SSReplenishment};
use crate::strategy::traits::{PolicyParameters, ReplenishmentPolicy};

/// Engine objects built from one request, not yet wired together.
#[derive(Debug)]
pub struct NetworkParts {
    pub facilities: Vec<Facility>,
    pub links: Vec<Link>,
    pub demands: Vec<DemandStream>,
}

impl NetworkParts {
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn demand_count(&self) -> usize {
        self.demands.len()
    }

    /// Hands the parts to the engine's network assembly.
    pub fn assemble(self) -> Result<Network, EngineError> {
        Network::assemble(self.facilities, self.links, self.demands)
    }
}

/// Translates a request into engine objects.
///
/// Every reference is checked before anything is constructed, so a bad
/// request never yields a partial network.
pub fn build_network(request: &SimulationRequest) -> Result<NetworkParts, BuildError> {
    let index = index_nodes(&request.nodes)?;
    for link in &request.links {
        check_link_endpoints(link, &index)?;
    }
    for demand in &request.demands {
        if !index.contains_key(demand.target_node.as_str()) {
            return Err(BuildError::UnknownDemandTarget {
                demand: demand.id.clone(),
                target: demand.target_node.clone(),
            });
        }
    }

    let facilities = request.nodes.iter().map(build_facility).collect();
    let links = request
        .links
        .iter()
        .map(|link| build_link(link, &index))
        .collect();
    let demands = request
        .demands
        .iter()
        .map(|demand| build_demand(demand, &index))
        .collect();

    Ok(NetworkParts {
        facilities,
        links,
        demands,
    })
}

/// Resolved policy parameters for a distributor, defaults filled in.
pub fn policy_parameters(node: &NodeConfig) -> PolicyParameters {
    match node.replenishment_policy {
        PolicyKind::SS => PolicyParameters::ReorderPoint {
            s: node.policy_s.unwrap_or(DEFAULT_SS_REORDER_POINT),
            big_s: node.policy_big_s.unwrap_or(DEFAULT_SS_ORDER_UP_TO),
        },
        PolicyKind::RQ => PolicyParameters::PeriodicReview {
            r: node.policy_r.unwrap_or(DEFAULT_RQ_REVIEW_INTERVAL),
            q: node.policy_q.unwrap_or(DEFAULT_RQ_ORDER_QUANTITY),
        },
    }
}

fn make_policy(parameters: PolicyParameters) -> Box<dyn ReplenishmentPolicy> {
    match parameters {
        PolicyParameters::ReorderPoint { s, big_s } => Box::new(SSReplenishment::new(s, big_s)),
        PolicyParameters::PeriodicReview { r, q } => Box::new(RQReplenishment::new(r, q)),
    }
}

fn index_nodes(nodes: &[NodeConfig]) -> Result<HashMap<&str, usize>, BuildError> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        if index.insert(node.id.as_str(), position).is_some() {
            return Err(BuildError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }
    Ok(index)
}

fn check_link_endpoints(link: &LinkConfig, index: &HashMap<&str, usize>) -> Result<(), BuildError> {
    if index.contains_key(link.source.as_str()) && index.contains_key(link.target.as_str()) {
        Ok(())
    } else {
        Err(BuildError::UnknownLinkEndpoint {
            link: link.id.clone(),
            from: link.source.clone(),
            to: link.target.clone(),
        })
    }
}

fn build_facility(node: &NodeConfig) -> Facility {
    match node.kind {
        NodeKind::Supplier => Facility::Supplier(SupplierNode::new(&node.id, &node.name)),
        NodeKind::Distributor => {
            let capacity = node.capacity.unwrap_or(DEFAULT_CAPACITY);
            let settings = InventorySettings {
                capacity,
                initial_level: node.initial_level.unwrap_or(capacity),
                holding_cost: node.holding_cost,
                buy_price: node.buy_price.unwrap_or(DEFAULT_BUY_PRICE),
                sell_price: node.sell_price.unwrap_or(DEFAULT_SELL_PRICE),
            };
            let policy = make_policy(policy_parameters(node));
            Facility::Inventory(InventoryNode::new(&node.id, &node.name, settings, policy))
        }
    }
}

// Endpoints were checked in the validation pass.
fn build_link(link: &LinkConfig, index: &HashMap<&str, usize>) -> Link {
    Link::new(
        &link.id,
        index[link.source.as_str()],
        index[link.target.as_str()],
        link.cost,
        link.lead_time,
    )
}

fn build_demand(demand: &DemandConfig, index: &HashMap<&str, usize>) -> DemandStream {
    DemandStream::constant(
        &demand.id,
        &demand.name,
        index[demand.target_node.as_str()],
        DemandProfile {
            arrival_interval: demand.arrival_interval,
            order_quantity: demand.order_quantity,
            delivery_cost: demand.delivery_cost,
            lead_time: demand.lead_time,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> SimulationRequest {
        serde_json::from_str(json).unwrap()
    }

    fn basic_request() -> SimulationRequest {
        request(
            r#"{
                "nodes": [
                    {"id": "S1", "name": "Supplier", "type": "supplier"},
                    {"id": "D1", "name": "Depot", "type": "distributor"},
                    {"id": "D2", "name": "Hub", "type": "distributor",
                     "replenishment_policy": "RQ", "capacity": 600}
                ],
                "links": [
                    {"id": "L1", "source": "S1", "target": "D1"},
                    {"id": "L2", "source": "D1", "target": "D2", "lead_time": 1.5}
                ],
                "demands": [{"id": "C1", "name": "Shop", "target_node": "D2"}],
                "sim_time": 31
            }"#,
        )
    }

    #[test]
    fn distributors_take_policy_and_stock_defaults() {
        let parts = build_network(&basic_request()).unwrap();

        let depot = parts.facilities[1].as_inventory().unwrap();
        assert_eq!(depot.capacity, 1000);
        assert_eq!(depot.initial_level, 1000);
        assert_eq!(depot.holding_cost, 0.22);
        assert_eq!(depot.buy_price, 150.0);
        assert_eq!(depot.sell_price, 300.0);
        assert_eq!(
            depot.policy.parameters(),
            PolicyParameters::ReorderPoint { s: 400, big_s: 1000 }
        );

        let hub = parts.facilities[2].as_inventory().unwrap();
        assert_eq!(hub.initial_level, 600);
        assert_eq!(
            hub.policy.parameters(),
            PolicyParameters::PeriodicReview { r: 1000.0, q: 500 }
        );
    }

    #[test]
    fn suppliers_ignore_stock_fields() {
        let parts = build_network(&request(
            r#"{"nodes": [{"id": "S1", "name": "Mine", "type": "supplier", "capacity": 5}]}"#,
        ))
        .unwrap();
        assert!(parts.facilities[0].as_inventory().is_none());
        assert_eq!(parts.facilities[0].kind_label(), "infinite_supplier");
    }

    #[test]
    fn links_and_demands_resolve_to_node_positions() {
        let parts = build_network(&basic_request()).unwrap();

        assert_eq!((parts.links[1].source, parts.links[1].sink), (1, 2));
        assert_eq!(parts.links[1].lead_time.next_value(), 1.5);
        assert_eq!(parts.links[0].cost, 10.0);
        assert_eq!(parts.demands[0].target, 2);
        assert_eq!(parts.demands[0].quantity.next_value(), 400);
    }

    #[test]
    fn building_twice_gives_equivalent_networks() {
        let request = basic_request();
        let first = build_network(&request).unwrap();
        let second = build_network(&request).unwrap();

        assert_eq!(first.facility_count(), second.facility_count());
        assert_eq!(first.link_count(), second.link_count());
        assert_eq!(first.demand_count(), second.demand_count());
        let ids = |parts: &NetworkParts| -> Vec<String> {
            parts.facilities.iter().map(|f| f.id().to_string()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn unknown_link_target_is_rejected() {
        let mut request = basic_request();
        request.links[0].target = "X9".to_string();
        assert_eq!(
            build_network(&request).unwrap_err(),
            BuildError::UnknownLinkEndpoint {
                link: "L1".into(),
                from: "S1".into(),
                to: "X9".into(),
            }
        );
    }

    #[test]
    fn unknown_demand_target_is_rejected() {
        let mut request = basic_request();
        request.demands[0].target_node = "nowhere".to_string();
        assert!(matches!(
            build_network(&request),
            Err(BuildError::UnknownDemandTarget { .. })
        ));
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let mut request = basic_request();
        request.nodes[2].id = "D1".to_string();
        assert_eq!(
            build_network(&request).unwrap_err(),
            BuildError::DuplicateNode { id: "D1".into() }
        );
    }

    #[test]
    fn built_parts_assemble_into_a_network() {
        let network = build_network(&basic_request()).unwrap().assemble().unwrap();
        assert_eq!(network.facilities().len(), 3);
        assert!(network.facility("D2").is_some());
    }
}
