// src/simulation/engine.rs

use std::collections::HashSet;
use tracing::debug;

use crate::error::EngineError;
use crate::model::calendar::{Event, EventCalendar};
use crate::model::demand::DemandStream;
use crate::model::facility::{Backorder, Facility, FacilityRole, InventoryNode};
use crate::model::link::Link;
use crate::simulation::config::{RunOptions, MAX_UNITS};
use crate::simulation::statistics::{NetworkStatistics, Tally};
use crate::strategy::traits::{PolicyParameters, Review};

/// An assembled supply-chain network.
///
/// A network runs once; its statistics stay `None` until [`Network::simulate`]
/// has completed.
#[derive(Debug)]
pub struct Network {
    facilities: Vec<Facility>,
    links: Vec<Link>,
    demands: Vec<DemandStream>,
    // The link each facility reorders through: its first inbound link.
    supply_link: Vec<Option<usize>>,
    statistics: Option<NetworkStatistics>,
}

struct RunState {
    calendar: EventCalendar,
    tally: Tally,
    log_events: bool,
}

impl Network {
    /// Checks every engine object and wires them into one network.
    pub fn assemble(
        facilities: Vec<Facility>,
        links: Vec<Link>,
        demands: Vec<DemandStream>,
    ) -> Result<Self, EngineError> {
        {
            let mut seen = HashSet::new();
            for facility in &facilities {
                if !seen.insert(facility.id()) {
                    return Err(invalid(
                        format!("node '{}'", facility.id()),
                        "duplicate node id",
                    ));
                }
                if let Some(node) = facility.as_inventory() {
                    check_inventory(node)?;
                }
            }
        }
        for link in &links {
            check_link(link, facilities.len())?;
        }
        for demand in &demands {
            check_demand(demand, facilities.len())?;
        }

        let mut supply_link = vec![None; facilities.len()];
        for (idx, link) in links.iter().enumerate() {
            supply_link[link.sink].get_or_insert(idx);
        }
        check_supply_cycles(&facilities, &links, &supply_link)?;

        Ok(Self {
            facilities,
            links,
            demands,
            supply_link,
            statistics: None,
        })
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn demands(&self) -> &[DemandStream] {
        &self.demands
    }

    pub fn facility(&self, id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id() == id)
    }

    /// Counters from the completed run, if there has been one.
    pub fn statistics(&self) -> Option<&NetworkStatistics> {
        self.statistics.as_ref()
    }

    /// Runs the network from `t = 0` until the horizon.
    ///
    /// Events scheduled at or after the horizon are never processed.
    pub fn simulate(&mut self, options: &RunOptions) -> Result<&NetworkStatistics, EngineError> {
        if self.statistics.is_some() {
            return Err(EngineError::AlreadySimulated);
        }
        if options.horizon == 0 {
            return Err(EngineError::InvalidHorizon(options.horizon));
        }
        let horizon = options.horizon as f64;
        let mut run = RunState {
            calendar: EventCalendar::new(),
            tally: Tally::default(),
            log_events: options.log_events,
        };

        for facility in &mut self.facilities {
            if let Some(node) = facility.as_inventory_mut() {
                node.reset();
            }
        }
        for (idx, demand) in self.demands.iter().enumerate() {
            run.calendar
                .schedule(demand.arrival.next_value(), Event::DemandArrival { demand: idx });
        }
        for idx in 0..self.facilities.len() {
            match self.review_of(idx) {
                Some(Review::Periodic { interval }) => {
                    run.calendar.schedule(interval, Event::PolicyReview { node: idx })
                }
                Some(Review::Continuous) => self.cascade_reorders(idx, 0.0, &mut run),
                None => {}
            }
        }

        while let Some((time, event)) = run.calendar.pop_before(horizon) {
            if run.log_events {
                debug!(time, ?event, "processing event");
            }
            match event {
                Event::DemandArrival { demand } => self.on_demand(demand, time, &mut run),
                Event::ShipmentArrival { node, quantity } => {
                    self.on_shipment(node, quantity, time, &mut run)
                }
                Event::CustomerDelivery { quantity } => {
                    run.tally.fulfillment_received_by_customers.record(quantity)
                }
                Event::PolicyReview { node } => {
                    if let Some(Review::Periodic { interval }) = self.review_of(node) {
                        run.calendar
                            .schedule(time + interval, Event::PolicyReview { node });
                    }
                    self.cascade_reorders(node, time, &mut run);
                }
            }
        }

        for facility in &mut self.facilities {
            if let Some(node) = facility.as_inventory_mut() {
                node.advance_to(horizon);
            }
        }
        let statistics = self.summarize(horizon, &run.tally);
        Ok(&*self.statistics.insert(statistics))
    }

    fn review_of(&self, node: usize) -> Option<Review> {
        self.facilities[node]
            .as_inventory()
            .map(|inventory| inventory.policy.review())
    }

    fn on_demand(&mut self, demand_idx: usize, time: f64, run: &mut RunState) {
        let demand = &self.demands[demand_idx];
        let target = demand.target;
        let quantity = demand.quantity.next_value();
        run.calendar.schedule(
            time + demand.arrival.next_value(),
            Event::DemandArrival { demand: demand_idx },
        );
        run.tally.demand_by_customers.record(quantity);

        let filled = match &mut self.facilities[target] {
            Facility::Supplier(_) => true,
            Facility::Inventory(node) => fill_or_backorder(
                node,
                Backorder::Customer {
                    demand: demand_idx,
                    quantity,
                },
                time,
                &mut run.tally,
            ),
        };
        if filled {
            ship_to_customer(&self.demands[demand_idx], quantity, time, run);
        }
        self.after_withdrawal(target, time, run);
    }

    fn on_shipment(&mut self, node_idx: usize, quantity: u64, time: f64, run: &mut RunState) {
        run.tally.fulfillment_received_by_site.record(quantity);
        let Some(node) = self.facilities[node_idx].as_inventory_mut() else {
            return;
        };
        let receipt = node.receive_shipment(time, quantity);
        let sell_price = node.sell_price;
        if run.log_events && receipt.discarded > 0 {
            debug!(time, node = %node.id, discarded = receipt.discarded, "shipment exceeded capacity");
        }

        for order in receipt.released {
            run.tally.revenue += order.quantity() as f64 * sell_price;
            match order {
                Backorder::Customer { demand, quantity } => {
                    ship_to_customer(&self.demands[demand], quantity, time, run)
                }
                Backorder::Site { link, quantity } => self.dispatch(link, quantity, time, run),
            }
        }
    }

    fn after_withdrawal(&mut self, node: usize, time: f64, run: &mut RunState) {
        if self.review_of(node) == Some(Review::Continuous) {
            self.cascade_reorders(node, time, run);
        }
    }

    /// Reviews `node`, then every continuous-review site upstream whose stock
    /// the resulting orders drew on, one tier at a time.
    fn cascade_reorders(&mut self, node: usize, time: f64, run: &mut RunState) {
        let mut next = Some(node);
        while let Some(idx) = next {
            next = self.reorder(idx, time, run);
        }
    }

    /// Asks the node's policy for an order and sends it up its supply link.
    ///
    /// Returns the upstream site that now needs a review of its own.
    fn reorder(&mut self, node_idx: usize, time: f64, run: &mut RunState) -> Option<usize> {
        let link = self.supply_link[node_idx]?;
        let node = self.facilities[node_idx].as_inventory_mut()?;
        let position = node.position();
        let quantity = node.policy.order_quantity(&position);
        if quantity == 0 {
            return None;
        }
        node.on_order = node.on_order.saturating_add(quantity);
        if run.log_events {
            debug!(time, node = %node.id, quantity, policy = node.policy.kind(), "placing replenishment order");
        }
        let source = self.request_shipment(link, quantity, time, run);
        (self.review_of(source) == Some(Review::Continuous)).then_some(source)
    }

    /// Fills or backorders a site order at the link's source; returns the source.
    fn request_shipment(&mut self, link_idx: usize, quantity: u64, time: f64, run: &mut RunState) -> usize {
        let source = self.links[link_idx].source;
        run.tally.demand_by_site.record(quantity);

        let shipped = match &mut self.facilities[source] {
            Facility::Supplier(_) => true,
            Facility::Inventory(node) => fill_or_backorder(
                node,
                Backorder::Site {
                    link: link_idx,
                    quantity,
                },
                time,
                &mut run.tally,
            ),
        };
        if shipped {
            self.dispatch(link_idx, quantity, time, run);
        }
        source
    }

    fn dispatch(&self, link_idx: usize, quantity: u64, time: f64, run: &mut RunState) {
        let link = &self.links[link_idx];
        run.tally.transportation_cost += link.cost;
        if let Some(buyer) = self.facilities[link.sink].as_inventory() {
            run.tally.spend_cost += quantity as f64 * buyer.buy_price;
        }
        run.calendar.schedule(
            time + link.lead_time.next_value(),
            Event::ShipmentArrival {
                node: link.sink,
                quantity,
            },
        );
    }

    fn summarize(&self, horizon: f64, tally: &Tally) -> NetworkStatistics {
        let mut stats = NetworkStatistics {
            num_of_nodes: self.facilities.len() as u64,
            num_of_links: self.links.len() as u64,
            ..NetworkStatistics::default()
        };
        for facility in &self.facilities {
            match facility.role() {
                FacilityRole::Supplier => stats.num_suppliers += 1,
                FacilityRole::Distributor => stats.num_distributors += 1,
            }
            if let Some(node) = facility.as_inventory() {
                stats.inventory_carry_cost += node.level_area() * node.holding_cost;
                stats.available_inv = stats.available_inv.saturating_add(node.level);
                stats.avg_available_inv += node.level_area() / horizon;
            }
        }

        stats.revenue = tally.revenue;
        stats.inventory_spend_cost = tally.spend_cost;
        stats.transportation_cost = tally.transportation_cost;
        stats.total_cost =
            stats.inventory_carry_cost + stats.inventory_spend_cost + stats.transportation_cost;
        stats.profit = stats.revenue - stats.total_cost;

        stats.demand_by_customers = tally.demand_by_customers;
        stats.demand_by_site = tally.demand_by_site;
        stats.total_demand = tally.demand_by_customers.combined(tally.demand_by_site);
        stats.shortage = tally.shortage;
        stats.backorders = tally.backorders;
        stats.fulfillment_received_by_customers = tally.fulfillment_received_by_customers;
        stats.fulfillment_received_by_site = tally.fulfillment_received_by_site;
        stats.total_fulfillment_received = tally
            .fulfillment_received_by_customers
            .combined(tally.fulfillment_received_by_site);

        if stats.total_demand.count() > 0 {
            stats.avg_cost_per_order = stats.total_cost / stats.total_demand.count() as f64;
        }
        if stats.total_demand.quantity() > 0 {
            stats.avg_cost_per_item = stats.total_cost / stats.total_demand.quantity() as f64;
        }
        stats
    }
}

/// Ships from stock if nothing is queued ahead and stock covers the order;
/// otherwise records the shortfall and queues the order.
fn fill_or_backorder(node: &mut InventoryNode, order: Backorder, time: f64, tally: &mut Tally) -> bool {
    let quantity = order.quantity();
    let queue_empty = node.backlog.is_empty();
    if queue_empty && node.withdraw(time, quantity) {
        tally.revenue += quantity as f64 * node.sell_price;
        return true;
    }
    let available = if queue_empty { node.level } else { 0 };
    tally.shortage.record(quantity.saturating_sub(available));
    tally.backorders.record(quantity);
    node.backlog.push_back(order);
    false
}

fn ship_to_customer(demand: &DemandStream, quantity: u64, time: f64, run: &mut RunState) {
    run.tally.transportation_cost += demand.delivery_cost;
    run.calendar
        .schedule(time + demand.lead_time, Event::CustomerDelivery { quantity });
}

fn invalid(entity: String, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidParameter {
        entity,
        reason: reason.into(),
    }
}

fn non_negative(entity: &str, label: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(
            entity.to_string(),
            format!("{label} must be a non-negative number, got {value}"),
        ))
    }
}

fn check_inventory(node: &InventoryNode) -> Result<(), EngineError> {
    let entity = format!("node '{}'", node.id);
    if node.capacity == 0 {
        return Err(invalid(entity, "capacity must be positive"));
    }
    if node.initial_level > node.capacity {
        return Err(invalid(
            entity,
            format!(
                "initial level {} exceeds capacity {}",
                node.initial_level, node.capacity
            ),
        ));
    }
    if node.capacity > MAX_UNITS {
        return Err(invalid(entity, format!("capacity must not exceed {MAX_UNITS}")));
    }
    match node.policy.parameters() {
        PolicyParameters::ReorderPoint { big_s, .. } if big_s > MAX_UNITS => {
            return Err(invalid(
                entity,
                format!("order-up-to level S must not exceed {MAX_UNITS}"),
            ));
        }
        PolicyParameters::PeriodicReview { q, .. } if q > MAX_UNITS => {
            return Err(invalid(
                entity,
                format!("order quantity Q must not exceed {MAX_UNITS}"),
            ));
        }
        _ => {}
    }
    non_negative(&entity, "holding cost", node.holding_cost)?;
    non_negative(&entity, "buy price", node.buy_price)?;
    non_negative(&entity, "sell price", node.sell_price)?;
    node.policy.check().map_err(|reason| invalid(entity, reason))
}

fn check_link(link: &Link, node_count: usize) -> Result<(), EngineError> {
    let entity = format!("link '{}'", link.id);
    if link.source >= node_count || link.sink >= node_count {
        return Err(invalid(entity, "endpoint is not part of the network"));
    }
    if link.source == link.sink {
        return Err(invalid(entity, "link connects a node to itself"));
    }
    non_negative(&entity, "cost", link.cost)?;
    non_negative(&entity, "lead time", link.lead_time.next_value())
}

fn check_demand(demand: &DemandStream, node_count: usize) -> Result<(), EngineError> {
    let entity = format!("demand '{}'", demand.id);
    if demand.target >= node_count {
        return Err(invalid(entity, "target is not part of the network"));
    }
    let interval = demand.arrival.next_value();
    if !interval.is_finite() || interval <= 0.0 {
        return Err(invalid(
            entity,
            format!("arrival interval must be positive, got {interval}"),
        ));
    }
    let quantity = demand.quantity.next_value();
    if quantity == 0 {
        return Err(invalid(entity, "order quantity must be positive"));
    }
    if quantity > MAX_UNITS {
        return Err(invalid(
            entity,
            format!("order quantity must not exceed {MAX_UNITS}"),
        ));
    }
    non_negative(&entity, "delivery cost", demand.delivery_cost)?;
    non_negative(&entity, "lead time", demand.lead_time)
}

/// Rejects networks where following supply links from a stocking node leads
/// back to it; such a loop could keep reordering forever.
///
/// Each facility has at most one supply link, so every walk is a path; nodes
/// already known to end outside a loop are not walked again.
fn check_supply_cycles(
    facilities: &[Facility],
    links: &[Link],
    supply_link: &[Option<usize>],
) -> Result<(), EngineError> {
    #[derive(Clone, Copy)]
    enum Mark {
        Unvisited,
        OnPath,
        Clear,
    }

    let mut marks = vec![Mark::Unvisited; facilities.len()];
    let mut path = Vec::new();
    for start in 0..facilities.len() {
        let mut current = start;
        loop {
            match marks[current] {
                Mark::Clear => break,
                Mark::OnPath => {
                    return Err(invalid(
                        format!("node '{}'", facilities[current].id()),
                        "replenishment links form a cycle",
                    ));
                }
                Mark::Unvisited => {}
            }
            marks[current] = Mark::OnPath;
            path.push(current);
            if facilities[current].as_inventory().is_none() {
                break;
            }
            let Some(link) = supply_link[current] else {
                break;
            };
            current = links[link].source;
        }
        for node in path.drain(..) {
            marks[node] = Mark::Clear;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demand::DemandProfile;
    use crate::model::facility::{InventorySettings, SupplierNode};
    use crate::strategy::implementations::{RQReplenishment, SSReplenishment};

    fn settings(capacity: u64, initial_level: u64) -> InventorySettings {
        InventorySettings {
            capacity,
            initial_level,
            holding_cost: 0.22,
            buy_price: 150.0,
            sell_price: 300.0,
        }
    }

    fn supplier(id: &str) -> Facility {
        Facility::Supplier(SupplierNode::new(id, id))
    }

    fn ss_depot(id: &str, capacity: u64, initial_level: u64) -> Facility {
        Facility::Inventory(InventoryNode::new(
            id,
            id,
            settings(capacity, initial_level),
            Box::new(SSReplenishment::new(400, 1000)),
        ))
    }

    fn demand(target: usize, interval: f64, quantity: u64) -> DemandStream {
        DemandStream::constant(
            "C1",
            "Customers",
            target,
            DemandProfile {
                arrival_interval: interval,
                order_quantity: quantity,
                delivery_cost: 10.0,
                lead_time: 5.0,
            },
        )
    }

    fn two_node_network() -> Network {
        Network::assemble(
            vec![supplier("S1"), ss_depot("D1", 1000, 1000)],
            vec![Link::new("L1", 0, 1, 10.0, 2.0)],
            vec![demand(1, 1.0, 400)],
        )
        .unwrap()
    }

    fn reason_of(err: EngineError) -> String {
        match err {
            EngineError::InvalidParameter { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn assemble_rejects_initial_level_above_capacity() {
        let err = Network::assemble(vec![ss_depot("D1", 100, 200)], vec![], vec![]).unwrap_err();
        assert_eq!(reason_of(err), "initial level 200 exceeds capacity 100");
    }

    #[test]
    fn assemble_rejects_zero_capacity() {
        let err = Network::assemble(vec![ss_depot("D1", 0, 0)], vec![], vec![]).unwrap_err();
        assert_eq!(reason_of(err), "capacity must be positive");
    }

    #[test]
    fn assemble_rejects_bad_policy_parameters() {
        let node = Facility::Inventory(InventoryNode::new(
            "D1",
            "D1",
            settings(1000, 1000),
            Box::new(RQReplenishment::new(-1.0, 500)),
        ));
        let err = Network::assemble(vec![node], vec![], vec![]).unwrap_err();
        assert!(reason_of(err).contains("review interval"));
    }

    #[test]
    fn assemble_rejects_non_positive_arrival_interval() {
        let err = Network::assemble(
            vec![ss_depot("D1", 1000, 1000)],
            vec![],
            vec![demand(0, 0.0, 400)],
        )
        .unwrap_err();
        assert!(reason_of(err).starts_with("arrival interval must be positive"));
    }

    #[test]
    fn assemble_rejects_self_loops_and_negative_lead_times() {
        let self_loop = Network::assemble(
            vec![ss_depot("D1", 1000, 1000)],
            vec![Link::new("L1", 0, 0, 1.0, 1.0)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(reason_of(self_loop), "link connects a node to itself");

        let negative = Network::assemble(
            vec![supplier("S1"), ss_depot("D1", 1000, 1000)],
            vec![Link::new("L1", 0, 1, 1.0, -2.0)],
            vec![],
        )
        .unwrap_err();
        assert!(reason_of(negative).starts_with("lead time must be a non-negative number"));
    }

    #[test]
    fn assemble_rejects_replenishment_cycles() {
        let err = Network::assemble(
            vec![ss_depot("D1", 1000, 1000), ss_depot("D2", 1000, 1000)],
            vec![
                Link::new("L1", 0, 1, 1.0, 1.0),
                Link::new("L2", 1, 0, 1.0, 1.0),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(reason_of(err), "replenishment links form a cycle");
    }

    #[test]
    fn assemble_rejects_a_tail_feeding_into_a_cycle() {
        let err = Network::assemble(
            vec![
                ss_depot("D1", 1000, 1000),
                ss_depot("D2", 1000, 1000),
                ss_depot("D3", 1000, 1000),
            ],
            vec![
                Link::new("L1", 1, 2, 1.0, 1.0),
                Link::new("L2", 0, 1, 1.0, 1.0),
                Link::new("L3", 1, 0, 1.0, 1.0),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(reason_of(err), "replenishment links form a cycle");
    }

    #[test]
    fn assemble_rejects_quantities_beyond_the_unit_limit() {
        let huge = Network::assemble(
            vec![supplier("S1")],
            vec![],
            vec![demand(0, 1.0, 10_000_000_000_000_000_000)],
        )
        .unwrap_err();
        assert!(reason_of(huge).starts_with("order quantity must not exceed"));

        let depot = Facility::Inventory(InventoryNode::new(
            "D1",
            "D1",
            settings(1000, 1000),
            Box::new(SSReplenishment::new(400, u64::MAX)),
        ));
        let err = Network::assemble(vec![depot], vec![], vec![]).unwrap_err();
        assert!(reason_of(err).starts_with("order-up-to level S must not exceed"));

        let err = Network::assemble(vec![ss_depot("D1", u64::MAX, 0)], vec![], vec![]).unwrap_err();
        assert!(reason_of(err).starts_with("capacity must not exceed"));
    }

    #[test]
    fn deep_chains_reorder_without_growing_the_stack() {
        const TIERS: usize = 20_000;
        let mut facilities = vec![supplier("S1")];
        let mut links = Vec::with_capacity(TIERS);
        for tier in 0..TIERS {
            facilities.push(ss_depot(&format!("D{tier}"), 1000, 1000));
            links.push(Link::new(format!("L{tier}"), tier, tier + 1, 1.0, 1.0));
        }

        // A small stack: the cascade up the chain must not recurse per tier.
        let handle = std::thread::Builder::new()
            .stack_size(512 * 1024)
            .spawn(move || {
                let mut network =
                    Network::assemble(facilities, links, vec![demand(TIERS, 1.0, 600)]).unwrap();
                network.simulate(&RunOptions::new(3)).unwrap().clone()
            })
            .unwrap();
        let stats = handle.join().unwrap();

        // At t=1 every tier drops to 400 and reorders 600 from the one above.
        assert!(stats.demand_by_site.count() >= TIERS as u64);
        assert_eq!(stats.num_distributors, TIERS as u64);
    }

    #[test]
    fn statistics_are_absent_until_the_run_completes() {
        let mut network = two_node_network();
        assert!(network.statistics().is_none());
        network.simulate(&RunOptions::new(10)).unwrap();
        assert!(network.statistics().is_some());
    }

    #[test]
    fn a_network_runs_only_once() {
        let mut network = two_node_network();
        network.simulate(&RunOptions::new(10)).unwrap();
        assert_eq!(
            network.simulate(&RunOptions::new(10)).unwrap_err(),
            EngineError::AlreadySimulated
        );
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let mut network = two_node_network();
        assert_eq!(
            network.simulate(&RunOptions::new(0)).unwrap_err(),
            EngineError::InvalidHorizon(0)
        );
    }

    #[test]
    fn short_run_matches_hand_computed_counters() {
        // t=1: 1000 -> 600. t=2: 600 -> 200, reorder 800 due at t=4.
        // t=3: 200 on hand, order of 400 is backordered.
        let mut network = two_node_network();
        let stats = network.simulate(&RunOptions::new(4)).unwrap().clone();

        assert_eq!(stats.demand_by_customers.0, 3);
        assert_eq!(stats.demand_by_customers.1, 1200);
        assert_eq!(stats.demand_by_site.0, 1);
        assert_eq!(stats.demand_by_site.1, 800);
        assert_eq!(stats.shortage.0, 1);
        assert_eq!(stats.shortage.1, 200);
        assert_eq!(stats.backorders.0, 1);
        assert_eq!(stats.backorders.1, 400);
        assert_eq!(stats.fulfillment_received_by_site.0, 0);
        assert_eq!(stats.available_inv, 200);

        assert_eq!(stats.revenue, 240_000.0);
        assert_eq!(stats.inventory_spend_cost, 120_000.0);
        assert_eq!(stats.transportation_cost, 30.0);
        assert!((stats.inventory_carry_cost - 440.0).abs() < 1e-9);
        assert!((stats.avg_available_inv - 500.0).abs() < 1e-9);
        assert!((stats.profit - (240_000.0 - 120_470.0)).abs() < 1e-6);

        let levels: Vec<u64> = network.facilities()[1]
            .inventory_history()
            .unwrap()
            .iter()
            .map(|s| s.level)
            .collect();
        assert_eq!(levels, vec![1000, 600, 200]);
    }

    #[test]
    fn backorders_are_served_when_replenishment_lands() {
        let mut network = two_node_network();
        let stats = network.simulate(&RunOptions::new(5)).unwrap().clone();

        // The 800 units arrive at t=4 and first clear the t=3 backorder.
        assert_eq!(stats.fulfillment_received_by_site.0, 1);
        assert_eq!(stats.fulfillment_received_by_site.1, 800);
        let depot = network.facilities()[1].as_inventory().unwrap();
        assert!(depot.backlog.is_empty());
    }

    #[test]
    fn periodic_review_orders_every_interval() {
        let depot = Facility::Inventory(InventoryNode::new(
            "D1",
            "D1",
            settings(1000, 100),
            Box::new(RQReplenishment::new(3.0, 200)),
        ));
        let mut network = Network::assemble(
            vec![supplier("S1"), depot],
            vec![Link::new("L1", 0, 1, 5.0, 0.5)],
            vec![],
        )
        .unwrap();
        let stats = network.simulate(&RunOptions::new(10)).unwrap();

        // Reviews at t=3, 6, 9.
        assert_eq!(stats.demand_by_site.0, 3);
        assert_eq!(stats.demand_by_site.1, 600);
        assert_eq!(stats.fulfillment_received_by_site.0, 3);
        assert_eq!(stats.available_inv, 700);
    }

    #[test]
    fn customers_served_by_a_supplier_are_always_filled() {
        let mut network =
            Network::assemble(vec![supplier("S1")], vec![], vec![demand(0, 2.0, 50)]).unwrap();
        let stats = network.simulate(&RunOptions::new(20)).unwrap();

        // Orders at t=2..18; only those placed by t=14 are delivered before t=20.
        assert_eq!(stats.demand_by_customers.0, 9);
        assert_eq!(stats.shortage.0, 0);
        assert_eq!(stats.fulfillment_received_by_customers.0, 7);
        assert_eq!(stats.revenue, 0.0);
        assert_eq!(stats.num_suppliers, 1);
        assert_eq!(stats.num_distributors, 0);
    }

    #[test]
    fn identical_networks_produce_identical_statistics() {
        let mut a = two_node_network();
        let mut b = two_node_network();
        let left = a.simulate(&RunOptions::new(31)).unwrap().clone();
        let right = b.simulate(&RunOptions::new(31)).unwrap().clone();
        assert_eq!(left, right);
    }
}
