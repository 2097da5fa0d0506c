// src/io/schema.rs

use serde::{Deserialize, Serialize};

use crate::simulation::config::{
    DEFAULT_ARRIVAL_INTERVAL, DEFAULT_DELIVERY_COST, DEFAULT_DEMAND_LEAD_TIME, DEFAULT_HOLDING_COST,
    DEFAULT_LINK_COST, DEFAULT_LINK_LEAD_TIME, DEFAULT_ORDER_QUANTITY, DEFAULT_SIM_TIME,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Supplier,
    Distributor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    #[default]
    SS,
    RQ,
}

/// Layout position of a node in the network editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A facility in the submitted network.
///
/// Every operational field is optional; the network builder fills the gaps.
/// Accepted either flat or in the editor's `{id, position, data: {...}}` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeWire")]
pub struct NodeConfig {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub capacity: Option<u64>,
    pub initial_level: Option<u64>,
    pub holding_cost: f64,
    pub replenishment_policy: PolicyKind,
    pub policy_s: Option<u64>,
    #[serde(rename = "policy_S")]
    pub policy_big_s: Option<u64>,
    #[serde(rename = "policy_R")]
    pub policy_r: Option<f64>,
    #[serde(rename = "policy_Q")]
    pub policy_q: Option<u64>,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    pub position: Option<Position>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NodeWire {
    Editor {
        id: String,
        data: NodeData,
        #[serde(default)]
        position: Option<Position>,
    },
    Flat {
        id: String,
        #[serde(flatten)]
        data: NodeData,
        #[serde(default)]
        position: Option<Position>,
    },
}

#[derive(Deserialize)]
struct NodeData {
    #[serde(alias = "label")]
    name: String,
    #[serde(rename = "type", alias = "nodeType")]
    kind: NodeKind,
    #[serde(default)]
    capacity: Option<u64>,
    #[serde(default)]
    initial_level: Option<u64>,
    #[serde(default = "default_holding_cost")]
    holding_cost: f64,
    #[serde(default)]
    replenishment_policy: PolicyKind,
    #[serde(default)]
    policy_s: Option<u64>,
    #[serde(default, rename = "policy_S")]
    policy_big_s: Option<u64>,
    #[serde(default, rename = "policy_R")]
    policy_r: Option<f64>,
    #[serde(default, rename = "policy_Q")]
    policy_q: Option<u64>,
    #[serde(default)]
    buy_price: Option<f64>,
    #[serde(default)]
    sell_price: Option<f64>,
}

impl From<NodeWire> for NodeConfig {
    fn from(wire: NodeWire) -> Self {
        let (id, data, position) = match wire {
            NodeWire::Editor { id, data, position } | NodeWire::Flat { id, data, position } => {
                (id, data, position)
            }
        };
        Self {
            id,
            name: data.name,
            kind: data.kind,
            capacity: data.capacity,
            initial_level: data.initial_level,
            holding_cost: data.holding_cost,
            replenishment_policy: data.replenishment_policy,
            policy_s: data.policy_s,
            policy_big_s: data.policy_big_s,
            policy_r: data.policy_r,
            policy_q: data.policy_q,
            buy_price: data.buy_price,
            sell_price: data.sell_price,
            position,
        }
    }
}

/// A directed transport lane between two nodes.
///
/// `cost` and `lead_time` may sit at the top level or under the editor's `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LinkWire")]
pub struct LinkConfig {
    pub id: String,
    pub source: String,
    pub target: String,
    pub cost: f64,
    pub lead_time: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinkWire {
    Editor {
        id: String,
        source: String,
        target: String,
        data: LinkTerms,
    },
    Flat {
        id: String,
        source: String,
        target: String,
        #[serde(flatten)]
        terms: LinkTerms,
    },
}

#[derive(Deserialize)]
struct LinkTerms {
    #[serde(default = "default_link_cost")]
    cost: f64,
    #[serde(default = "default_link_lead_time")]
    lead_time: f64,
}

impl From<LinkWire> for LinkConfig {
    fn from(wire: LinkWire) -> Self {
        let (id, source, target, terms) = match wire {
            LinkWire::Editor {
                id,
                source,
                target,
                data,
            } => (id, source, target, data),
            LinkWire::Flat {
                id,
                source,
                target,
                terms,
            } => (id, source, target, terms),
        };
        Self {
            id,
            source,
            target,
            cost: terms.cost,
            lead_time: terms.lead_time,
        }
    }
}

/// A constant customer demand stream against one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandConfig {
    pub id: String,
    pub name: String,
    pub target_node: String,
    #[serde(default = "default_arrival_interval")]
    pub arrival_interval: f64,
    #[serde(default = "default_order_quantity")]
    pub order_quantity: u64,
    #[serde(default = "default_delivery_cost")]
    pub delivery_cost: f64,
    #[serde(default = "default_demand_lead_time")]
    pub lead_time: f64,
}

/// The body of a simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub nodes: Vec<NodeConfig>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    #[serde(default)]
    pub demands: Vec<DemandConfig>,
    #[serde(default = "default_sim_time")]
    pub sim_time: u64,
}

fn default_holding_cost() -> f64 {
    DEFAULT_HOLDING_COST
}

fn default_link_cost() -> f64 {
    DEFAULT_LINK_COST
}

fn default_link_lead_time() -> f64 {
    DEFAULT_LINK_LEAD_TIME
}

fn default_arrival_interval() -> f64 {
    DEFAULT_ARRIVAL_INTERVAL
}

fn default_order_quantity() -> u64 {
    DEFAULT_ORDER_QUANTITY
}

fn default_delivery_cost() -> f64 {
    DEFAULT_DELIVERY_COST
}

fn default_demand_lead_time() -> f64 {
    DEFAULT_DEMAND_LEAD_TIME
}

fn default_sim_time() -> u64 {
    DEFAULT_SIM_TIME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_takes_defaults() {
        let request: SimulationRequest = serde_json::from_str(
            r#"{
                "nodes": [{"id": "D1", "name": "Depot", "type": "distributor"}],
                "links": [{"id": "L1", "source": "S1", "target": "D1"}],
                "demands": [{"id": "C1", "name": "Shop", "target_node": "D1"}]
            }"#,
        )
        .unwrap();

        assert_eq!(request.sim_time, 30);
        let node = &request.nodes[0];
        assert_eq!(node.kind, NodeKind::Distributor);
        assert_eq!(node.replenishment_policy, PolicyKind::SS);
        assert_eq!(node.holding_cost, 0.22);
        assert_eq!(node.capacity, None);
        assert_eq!(request.links[0].cost, 10.0);
        assert_eq!(request.links[0].lead_time, 5.0);
        let demand = &request.demands[0];
        assert_eq!(demand.arrival_interval, 1.0);
        assert_eq!(demand.order_quantity, 400);
        assert_eq!(demand.delivery_cost, 10.0);
        assert_eq!(demand.lead_time, 5.0);
    }

    #[test]
    fn policy_parameters_use_their_case_sensitive_names() {
        let node: NodeConfig = serde_json::from_str(
            r#"{"id": "D1", "name": "Depot", "type": "distributor",
                "replenishment_policy": "RQ",
                "policy_s": 10, "policy_S": 90, "policy_R": 7, "policy_Q": 250}"#,
        )
        .unwrap();

        assert_eq!(node.replenishment_policy, PolicyKind::RQ);
        assert_eq!(node.policy_s, Some(10));
        assert_eq!(node.policy_big_s, Some(90));
        assert_eq!(node.policy_r, Some(7.0));
        assert_eq!(node.policy_q, Some(250));
    }

    #[test]
    fn editor_field_names_are_accepted() {
        let node: NodeConfig = serde_json::from_str(
            r#"{"id": "S1", "label": "Mine", "nodeType": "supplier",
                "position": {"x": 12.5, "y": -4}}"#,
        )
        .unwrap();

        assert_eq!(node.name, "Mine");
        assert_eq!(node.kind, NodeKind::Supplier);
        assert_eq!(node.position, Some(Position { x: 12.5, y: -4.0 }));
    }

    #[test]
    fn editor_envelopes_are_unwrapped() {
        let node: NodeConfig = serde_json::from_str(
            r#"{"id": "D1", "type": "custom", "position": {"x": 40, "y": 80},
                "data": {"label": "Depot", "nodeType": "distributor",
                         "capacity": 800, "policy_R": 7, "replenishment_policy": "RQ"}}"#,
        )
        .unwrap();
        assert_eq!(node.id, "D1");
        assert_eq!(node.name, "Depot");
        assert_eq!(node.kind, NodeKind::Distributor);
        assert_eq!(node.capacity, Some(800));
        assert_eq!(node.policy_r, Some(7.0));
        assert_eq!(node.holding_cost, 0.22);
        assert_eq!(node.position, Some(Position { x: 40.0, y: 80.0 }));

        let link: LinkConfig = serde_json::from_str(
            r#"{"id": "e1", "source": "S1", "target": "D1", "animated": true,
                "data": {"cost": 3.5, "lead_time": 2}}"#,
        )
        .unwrap();
        assert_eq!((link.cost, link.lead_time), (3.5, 2.0));
    }

    #[test]
    fn flat_links_keep_their_terms() {
        let link: LinkConfig =
            serde_json::from_str(r#"{"id": "L1", "source": "S1", "target": "D1", "cost": 4}"#)
                .unwrap();
        assert_eq!(link.cost, 4.0);
        assert_eq!(link.lead_time, 5.0);
    }

    #[test]
    fn unknown_facility_kind_is_rejected() {
        let result: Result<NodeConfig, _> =
            serde_json::from_str(r#"{"id": "X", "name": "X", "type": "warehouse"}"#);
        assert!(result.is_err());
    }
}
