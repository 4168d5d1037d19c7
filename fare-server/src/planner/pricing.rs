//! Multi-leg journey pricing.
//!
//! Splits a journey into legs, resolves each leg's distance, prices each
//! leg on its own distance, and sums the results.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{FareError, Journey, Station};
use crate::fare::{PassComparison, Tariff};
use crate::network::{DistanceSource, NetworkError, NetworkGraph, hankyu};
use crate::resolver::{
    DirectLookupResolver, DistanceResolver, ResolveError, Route, ShortestPathResolver,
};

use super::config::{PlannerConfig, ResolverKind};

/// One priced leg of a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct LegResult {
    /// Station the leg starts from
    pub from: Station,
    /// Station the leg ends at
    pub to: Station,
    /// Leg distance in kilometres
    pub distance_km: f64,
    /// Leg fare in yen
    pub fare: u32,
    /// Stations passed through, including both ends
    pub path: Vec<Station>,
}

/// A fully priced journey.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyResult {
    /// Stations in travel order: start, stopovers, goal
    pub journey_order: Vec<Station>,
    /// One entry per consecutive pair in `journey_order`
    pub legs: Vec<LegResult>,
    /// Sum of leg distances
    pub total_distance_km: f64,
    /// Sum of leg fares
    pub total_fare: u32,
    /// Comparison against the flat-rate pass, when one is configured
    pub pass: Option<PassComparison>,
}

/// Prices journeys against fixed reference data.
///
/// Holds the station universe, a distance resolver and a tariff. All of
/// these are immutable, so a single planner can be shared across threads.
#[derive(Clone)]
pub struct JourneyPlanner {
    stations: Arc<BTreeSet<Station>>,
    resolver: Arc<dyn DistanceResolver>,
    tariff: Tariff,
    pass_price: Option<u32>,
}

impl std::fmt::Debug for JourneyPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JourneyPlanner")
            .field("stations", &self.stations.len())
            .field("resolver", &self.resolver.name())
            .field("tariff", &self.tariff)
            .field("pass_price", &self.pass_price)
            .finish()
    }
}

impl JourneyPlanner {
    /// Create a planner from its parts.
    pub fn new(
        stations: BTreeSet<Station>,
        resolver: Arc<dyn DistanceResolver>,
        tariff: Tariff,
        pass_price: Option<u32>,
    ) -> Self {
        Self {
            stations: Arc::new(stations),
            resolver,
            tariff,
            pass_price,
        }
    }

    /// Create a planner that searches the given topology, weighted by
    /// `source.table`. The station universe is `stations`.
    pub fn with_graph(
        stations: &[Station],
        edges: &[(Station, Station)],
        source: &DistanceSource,
        config: &PlannerConfig,
        tariff: Tariff,
    ) -> Result<Self, NetworkError> {
        let graph = NetworkGraph::build(stations, edges, &source.table, config.missing_edge)?;
        let resolver = ShortestPathResolver::new(Arc::new(graph));

        Ok(Self::new(
            stations.iter().cloned().collect(),
            Arc::new(resolver),
            tariff,
            config.pass_price,
        ))
    }

    /// Create a planner that looks distances up directly in
    /// `source.table`. The station universe is every loaded station.
    pub fn with_table(source: DistanceSource, config: &PlannerConfig, tariff: Tariff) -> Self {
        let resolver = DirectLookupResolver::new(Arc::new(source.table));
        Self::new(
            source.stations,
            Arc::new(resolver),
            tariff,
            config.pass_price,
        )
    }

    /// Create a planner for the strategy named in `config`, using the
    /// built-in Hankyu topology for the graph strategy.
    pub fn from_source(
        source: DistanceSource,
        config: &PlannerConfig,
        tariff: Tariff,
    ) -> Result<Self, NetworkError> {
        let planner = match config.resolver {
            ResolverKind::Graph => Self::with_graph(
                &hankyu::stations(),
                &hankyu::edges(),
                &source,
                config,
                tariff,
            )?,
            ResolverKind::Table => Self::with_table(source, config, tariff),
        };

        info!(
            resolver = planner.resolver.name(),
            stations = planner.stations.len(),
            pass_price = ?planner.pass_price,
            "Journey planner ready"
        );

        Ok(planner)
    }

    /// All known stations in sorted order.
    pub fn list_stations(&self) -> Vec<Station> {
        self.stations.iter().cloned().collect()
    }

    /// Check whether a station is part of the known universe.
    pub fn contains(&self, station: &Station) -> bool {
        self.stations.contains(station)
    }

    /// The tariff used for leg fares.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Price a journey given as raw station names.
    ///
    /// Validation happens before any distance is resolved: blank names are
    /// `InvalidInput`, and the first name (in travel order) outside the
    /// station universe is `UnknownStation`. Legs are then resolved in
    /// order and the first one that fails aborts the whole computation.
    pub fn compute_journey<S: AsRef<str>>(
        &self,
        start: &str,
        stops: &[S],
        goal: &str,
    ) -> Result<JourneyResult, FareError> {
        let start = Station::parse(start)
            .map_err(|_| FareError::InvalidInput("start is required".to_string()))?;
        let goal = Station::parse(goal)
            .map_err(|_| FareError::InvalidInput("goal is required".to_string()))?;
        let stops = stops
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Station::parse(s.as_ref())
                    .map_err(|_| FareError::InvalidInput(format!("stop {} is blank", i + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.price(&Journey::from_parts(start, stops, goal))
    }

    /// Price an already-constructed journey.
    pub fn price(&self, journey: &Journey) -> Result<JourneyResult, FareError> {
        if let Some(unknown) = journey.stations().iter().find(|s| !self.contains(s)) {
            return Err(FareError::UnknownStation(unknown.as_str().to_string()));
        }

        let mut legs = Vec::with_capacity(journey.len() - 1);

        for leg in journey.legs() {
            let route = self.resolver.resolve(leg.from, leg.to);
            let Route { distance_km, path } = route.map_err(|e| match e {
                ResolveError::UnknownStation(s) => FareError::UnknownStation(s.to_string()),
                ResolveError::NoRoute => FareError::NoRouteFound {
                    from: leg.from.clone(),
                    to: leg.to.clone(),
                },
            })?;

            let fare = self.tariff.fare_for(distance_km);

            debug!(
                from = %leg.from,
                to = %leg.to,
                km = distance_km,
                fare,
                hops = path.len().saturating_sub(1),
                "Priced leg"
            );

            legs.push(LegResult {
                from: leg.from.clone(),
                to: leg.to.clone(),
                distance_km,
                fare,
                path,
            });
        }

        let total_distance_km: f64 = legs.iter().map(|l| l.distance_km).sum();
        let total_fare: u32 = legs.iter().map(|l| l.fare).sum();
        let pass = self
            .pass_price
            .map(|price| PassComparison::compare(total_fare, price));

        info!(
            start = %journey.start(),
            goal = %journey.goal(),
            legs = legs.len(),
            total_km = total_distance_km,
            total_fare,
            verdict = pass.map(|p| p.verdict.as_str()),
            "Priced journey"
        );

        Ok(JourneyResult {
            journey_order: journey.stations().to_vec(),
            legs,
            total_distance_km,
            total_fare,
            pass,
        })
    }
}

#[cfg(test)]
#[path = "pricing_tests.rs"]
mod tests;
