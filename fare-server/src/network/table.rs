//! Distance table between station pairs.
//!
//! The table is the single fact the rest of the engine needs from the
//! outside world: for an ordered pair of stations, how many kilometres
//! separate them, if known.

use std::collections::{BTreeSet, HashMap};

use crate::domain::Station;

/// Kilometre distances keyed by ordered station pair.
///
/// Entries are directed: `(A, B)` and `(B, A)` are independent unless
/// inserted with [`DistanceTable::insert_symmetric`]. A missing pair means
/// the distance is unknown.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<Station, HashMap<Station, f64>>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance for the ordered pair `(from, to)`.
    ///
    /// A later insert for the same pair replaces the earlier one.
    pub fn insert(&mut self, from: Station, to: Station, km: f64) {
        self.distances.entry(from).or_default().insert(to, km);
    }

    /// Record the distance in both directions.
    pub fn insert_symmetric(&mut self, a: Station, b: Station, km: f64) {
        self.insert(a.clone(), b.clone(), km);
        self.insert(b, a, km);
    }

    /// Get the distance for the ordered pair, if tabulated.
    pub fn get(&self, from: &Station, to: &Station) -> Option<f64> {
        self.distances.get(from)?.get(to).copied()
    }

    /// Every station that appears on either side of any entry.
    pub fn stations(&self) -> BTreeSet<Station> {
        self.distances
            .iter()
            .flat_map(|(from, row)| std::iter::once(from).chain(row.keys()))
            .cloned()
            .collect()
    }

    /// Returns the number of directed entries.
    pub fn len(&self) -> usize {
        self.distances.values().map(HashMap::len).sum()
    }

    /// Returns true if nothing is tabulated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
