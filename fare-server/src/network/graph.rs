//! Weighted station graph.
//!
//! The graph is built once at start-up from the fixed topology and the
//! loaded distance table, and is read-only afterwards.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::Station;

use super::table::DistanceTable;

/// Weight given to an edge when the distance table has no entry for it.
pub const DEFAULT_EDGE_KM: f64 = 1.0;

/// What to do when the distance table has no entry for a known edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissingEdgePolicy {
    /// Use the given weight and log a warning.
    Default(f64),
    /// Refuse to build the graph.
    Fail,
}

impl Default for MissingEdgePolicy {
    fn default() -> Self {
        MissingEdgePolicy::Default(DEFAULT_EDGE_KM)
    }
}

/// Errors from building a [`NetworkGraph`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// An edge names a station that is not in the station list
    #[error("edge {from} - {to} names unknown station {station}")]
    UnknownEdgeStation {
        from: Station,
        to: Station,
        station: Station,
    },

    /// An edge connects a station to itself
    #[error("edge connects {0} to itself")]
    SelfLoop(Station),

    /// The distance table has no entry for an edge and the policy forbids a default
    #[error("no distance for edge {from} - {to}")]
    MissingEdgeDistance { from: Station, to: Station },

    /// A tabulated edge distance is negative or not finite
    #[error("invalid distance {km} for edge {from} - {to}")]
    InvalidEdgeDistance { from: Station, to: Station, km: f64 },
}

/// Adjacency-list graph of stations weighted by kilometres.
///
/// # Invariants
///
/// - Every station in the station list is a key, even if it has no edges
/// - Every edge appears twice, once per direction, with the same weight
/// - All weights are finite and non-negative
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    adjacency: HashMap<Station, Vec<(Station, f64)>>,
}

impl NetworkGraph {
    /// Build the graph from a station list and an edge list.
    ///
    /// Each edge's weight is looked up in `table` using the pair exactly as
    /// given in `edges`. When there is no entry, `policy` decides between a
    /// fallback weight and an error.
    pub fn build(
        stations: &[Station],
        edges: &[(Station, Station)],
        table: &DistanceTable,
        policy: MissingEdgePolicy,
    ) -> Result<Self, NetworkError> {
        let known: HashSet<&Station> = stations.iter().collect();
        let mut adjacency: HashMap<Station, Vec<(Station, f64)>> =
            stations.iter().map(|s| (s.clone(), Vec::new())).collect();

        let mut defaulted = 0;

        for (a, b) in edges {
            for endpoint in [a, b] {
                if !known.contains(endpoint) {
                    return Err(NetworkError::UnknownEdgeStation {
                        from: a.clone(),
                        to: b.clone(),
                        station: endpoint.clone(),
                    });
                }
            }
            if a == b {
                return Err(NetworkError::SelfLoop(a.clone()));
            }

            let km = match (table.get(a, b), policy) {
                (Some(km), _) => km,
                (None, MissingEdgePolicy::Default(km)) => {
                    warn!(from = %a, to = %b, km, "No tabulated distance for edge, using default");
                    defaulted += 1;
                    km
                }
                (None, MissingEdgePolicy::Fail) => {
                    return Err(NetworkError::MissingEdgeDistance {
                        from: a.clone(),
                        to: b.clone(),
                    });
                }
            };

            if !km.is_finite() || km < 0.0 {
                return Err(NetworkError::InvalidEdgeDistance {
                    from: a.clone(),
                    to: b.clone(),
                    km,
                });
            }

            if let Some(list) = adjacency.get_mut(a) {
                list.push((b.clone(), km));
            }
            if let Some(list) = adjacency.get_mut(b) {
                list.push((a.clone(), km));
            }
        }

        debug!(
            stations = adjacency.len(),
            edges = edges.len(),
            defaulted,
            "Built network graph"
        );

        Ok(Self { adjacency })
    }

    /// Neighbours of a station with edge weights, or `None` if the station
    /// is not in the graph.
    pub fn neighbours(&self, station: &Station) -> Option<&[(Station, f64)]> {
        self.adjacency.get(station).map(Vec::as_slice)
    }

    /// Check whether a station is in the graph.
    pub fn contains(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn line() -> (Vec<Station>, Vec<(Station, Station)>) {
        let stations = vec![st("A"), st("B"), st("C")];
        let edges = vec![(st("A"), st("B")), (st("B"), st("C"))];
        (stations, edges)
    }

    #[test]
    fn edges_are_stored_in_both_directions() {
        let (stations, edges) = line();
        let mut table = DistanceTable::new();
        table.insert(st("A"), st("B"), 2.5);
        table.insert(st("B"), st("C"), 1.0);

        let graph =
            NetworkGraph::build(&stations, &edges, &table, MissingEdgePolicy::Fail).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbours(&st("A")).unwrap(), &[(st("B"), 2.5)]);
        assert_eq!(
            graph.neighbours(&st("B")).unwrap(),
            &[(st("A"), 2.5), (st("C"), 1.0)]
        );
        assert_eq!(graph.neighbours(&st("C")).unwrap(), &[(st("B"), 1.0)]);
    }

    #[test]
    fn lookup_uses_pair_as_given() {
        let (stations, edges) = line();
        let mut table = DistanceTable::new();
        // Reverse direction only: the builder must not find it
        table.insert(st("B"), st("A"), 9.0);
        table.insert(st("B"), st("C"), 1.0);

        let policy = MissingEdgePolicy::default();
        let graph = NetworkGraph::build(&stations, &edges, &table, policy).unwrap();

        assert_eq!(
            graph.neighbours(&st("A")).unwrap(),
            &[(st("B"), DEFAULT_EDGE_KM)]
        );
    }

    #[test]
    fn missing_distance_fails_under_fail_policy() {
        let (stations, edges) = line();
        let mut table = DistanceTable::new();
        table.insert(st("A"), st("B"), 2.5);

        let err =
            NetworkGraph::build(&stations, &edges, &table, MissingEdgePolicy::Fail).unwrap_err();
        assert_eq!(
            err,
            NetworkError::MissingEdgeDistance {
                from: st("B"),
                to: st("C"),
            }
        );
    }

    #[test]
    fn custom_default_weight() {
        let (stations, edges) = line();
        let table = DistanceTable::new();

        let policy = MissingEdgePolicy::Default(3.0);
        let graph = NetworkGraph::build(&stations, &edges, &table, policy).unwrap();
        assert_eq!(graph.neighbours(&st("C")).unwrap(), &[(st("B"), 3.0)]);
    }

    #[test]
    fn isolated_station_is_still_a_key() {
        let stations = vec![st("A"), st("B"), st("Z")];
        let edges = vec![(st("A"), st("B"))];
        let graph = NetworkGraph::build(
            &stations,
            &edges,
            &DistanceTable::new(),
            MissingEdgePolicy::default(),
        )
        .unwrap();

        assert!(graph.contains(&st("Z")));
        assert!(graph.neighbours(&st("Z")).unwrap().is_empty());
        assert!(graph.neighbours(&st("Q")).is_none());
    }

    #[test]
    fn rejects_unknown_edge_station() {
        let stations = vec![st("A"), st("B")];
        let edges = vec![(st("A"), st("X"))];
        let err = NetworkGraph::build(
            &stations,
            &edges,
            &DistanceTable::new(),
            MissingEdgePolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NetworkError::UnknownEdgeStation { station, .. } if station == st("X")
        ));
    }

    #[test]
    fn rejects_self_loop() {
        let stations = vec![st("A")];
        let edges = vec![(st("A"), st("A"))];
        let err = NetworkGraph::build(
            &stations,
            &edges,
            &DistanceTable::new(),
            MissingEdgePolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err, NetworkError::SelfLoop(st("A")));
    }

    #[test]
    fn rejects_negative_distance() {
        let (stations, edges) = line();
        let mut table = DistanceTable::new();
        table.insert(st("A"), st("B"), -1.0);
        let policy = MissingEdgePolicy::default();
        let err = NetworkGraph::build(&stations, &edges, &table, policy).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidEdgeDistance { .. }));
    }

    #[test]
    fn builds_the_hankyu_network() {
        let stations = super::super::hankyu::stations();
        let edges = super::super::hankyu::edges();
        let graph = NetworkGraph::build(
            &stations,
            &edges,
            &DistanceTable::new(),
            MissingEdgePolicy::default(),
        )
        .unwrap();

        assert_eq!(graph.len(), stations.len());
        assert_eq!(graph.edge_count(), edges.len());
    }
}
