// src/model/calendar.rs

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Something that happens at a point in simulated time.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A customer order from demand stream `demand` arrives at its facility.
    DemandArrival { demand: usize },
    /// A replenishment shipment reaches facility `node`.
    ShipmentArrival { node: usize, quantity: u64 },
    /// A shipped customer order reaches the customer.
    CustomerDelivery { quantity: u64 },
    /// A periodic-review policy at `node` wakes up.
    PolicyReview { node: usize },
}

#[derive(Debug, Clone)]
struct Scheduled {
    time: f64,
    seq: u64,
    event: Event,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // Reversed so the max-heap pops the earliest (time, seq) first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pending events ordered by time, ties broken by insertion order.
#[derive(Debug, Default)]
pub struct EventCalendar {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, time: f64, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { time, seq, event });
    }

    /// Pops the next event if it happens strictly before `horizon`.
    pub fn pop_before(&mut self, horizon: f64) -> Option<(f64, Event)> {
        if self.heap.peek()?.time >= horizon {
            return None;
        }
        self.heap.pop().map(|s| (s.time, s.event))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
