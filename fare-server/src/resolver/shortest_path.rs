//! Shortest-path distance over the network graph.

use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;

use tracing::trace;

use crate::domain::Station;
use crate::network::NetworkGraph;

use super::state::State;
use super::{DistanceResolver, ResolveError, Route};

/// Resolves distances with Dijkstra's algorithm over a [`NetworkGraph`].
///
/// The search stops the first time the goal is popped from the frontier,
/// which is its shortest distance since all weights are non-negative.
/// Frontier entries with equal distance are popped in lexicographic order
/// of station name, then of the path taken, so the returned path is
/// deterministic when two paths tie.
#[derive(Debug, Clone)]
pub struct ShortestPathResolver {
    graph: Arc<NetworkGraph>,
}

impl ShortestPathResolver {
    /// Create a resolver over a shared graph.
    pub fn new(graph: Arc<NetworkGraph>) -> Self {
        Self { graph }
    }
}

impl DistanceResolver for ShortestPathResolver {
    fn resolve(&self, from: &Station, to: &Station) -> Result<Route, ResolveError> {
        for station in [from, to] {
            if !self.graph.contains(station) {
                return Err(ResolveError::UnknownStation(station.clone()));
            }
        }

        if from == to {
            return Ok(Route::stay(from));
        }

        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<Station> = HashSet::new();
        let mut popped = 0usize;

        frontier.push(State {
            cost: 0.0,
            station: from.clone(),
            path: vec![from.clone()],
        });

        while let Some(State {
            cost,
            station,
            path,
        }) = frontier.pop()
        {
            popped += 1;

            if &station == to {
                trace!(%from, %to, km = cost, popped, "Shortest path found");
                return Ok(Route {
                    distance_km: cost,
                    path,
                });
            }

            if !visited.insert(station.clone()) {
                continue;
            }

            let Some(neighbours) = self.graph.neighbours(&station) else {
                continue;
            };

            for (next, km) in neighbours {
                if visited.contains(next) {
                    continue;
                }
                let mut next_path = Vec::with_capacity(path.len() + 1);
                next_path.extend_from_slice(&path);
                next_path.push(next.clone());

                frontier.push(State {
                    cost: cost + km,
                    station: next.clone(),
                    path: next_path,
                });
            }
        }

        trace!(%from, %to, popped, "Frontier exhausted");
        Err(ResolveError::NoRoute)
    }

    fn name(&self) -> &'static str {
        "graph"
    }
}
