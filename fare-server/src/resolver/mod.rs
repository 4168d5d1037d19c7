//! Inter-station distance resolution.
//!
//! The planner asks a [`DistanceResolver`] how far apart two stations are.
//! Two strategies exist: shortest-path search over the network graph, and
//! direct lookup in the distance table. The strategy is chosen once at
//! start-up.

mod direct;
mod shortest_path;
mod state;

pub use direct::DirectLookupResolver;
pub use shortest_path::ShortestPathResolver;

use crate::domain::Station;

/// Distance between two stations and the stations passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Total distance in kilometres
    pub distance_km: f64,
    /// Stations in travel order, including both ends
    pub path: Vec<Station>,
}

impl Route {
    /// The zero-length route from a station to itself.
    pub fn stay(station: &Station) -> Self {
        Self {
            distance_km: 0.0,
            path: vec![station.clone()],
        }
    }
}

/// Error from resolving a single pair of stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The station is not known to this resolver
    #[error("station {0} is not on the network")]
    UnknownStation(Station),

    /// Both stations are known but no distance connects them
    #[error("no route between the stations")]
    NoRoute,
}

/// Strategy for determining the distance between two stations.
///
/// Implementations hold only immutable reference data, so a single
/// resolver can serve concurrent requests.
pub trait DistanceResolver: Send + Sync {
    /// Resolve the distance from `from` to `to`.
    fn resolve(&self, from: &Station, to: &Station) -> Result<Route, ResolveError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
