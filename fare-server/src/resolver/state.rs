use std::cmp::Ordering;

use crate::domain::Station;

/// Frontier entry for the shortest-path search.
pub(super) struct State {
    pub(super) cost: f64,
    pub(super) station: Station,
    /// Stations from the start up to and including `station`.
    pub(super) path: Vec<Station>,
}

// Min-heap by cost, then by station name, then by path, for use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
