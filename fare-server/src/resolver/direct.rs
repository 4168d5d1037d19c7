//! Direct distance-table lookup.

use std::sync::Arc;

use crate::domain::Station;
use crate::network::DistanceTable;

use super::{DistanceResolver, ResolveError, Route};

/// Resolves distances by looking the ordered pair up in a [`DistanceTable`].
///
/// Every tabulated pair counts as a single hop. An untabulated pair is an
/// error; no default distance is ever substituted. A station paired with
/// itself is zero kilometres unless the table says otherwise.
#[derive(Debug, Clone)]
pub struct DirectLookupResolver {
    table: Arc<DistanceTable>,
}

impl DirectLookupResolver {
    /// Create a resolver over a shared table.
    pub fn new(table: Arc<DistanceTable>) -> Self {
        Self { table }
    }
}

impl DistanceResolver for DirectLookupResolver {
    fn resolve(&self, from: &Station, to: &Station) -> Result<Route, ResolveError> {
        match self.table.get(from, to) {
            Some(km) if from == to => Ok(Route {
                distance_km: km,
                path: vec![from.clone()],
            }),
            Some(km) => Ok(Route {
                distance_km: km,
                path: vec![from.clone(), to.clone()],
            }),
            None if from == to => Ok(Route::stay(from)),
            None => Err(ResolveError::NoRoute),
        }
    }

    fn name(&self) -> &'static str {
        "table"
    }
}
