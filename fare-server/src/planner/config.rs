//! Planner configuration.

use std::fmt;
use std::str::FromStr;

use crate::fare::{DEFAULT_PASS_PRICE, Tariff};
use crate::network::{LoadMode, MissingEdgePolicy};

/// Which distance resolution strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverKind {
    /// Shortest path over the built-in network graph.
    #[default]
    Graph,
    /// Direct lookup in a full station-pair distance table.
    ///
    /// Every pair a journey can ask for must be tabulated. The bundled
    /// `hankyu_kilo.csv` lists adjacent stations only, so most journeys
    /// against it fail with no route.
    Table,
}

/// Error returned when parsing an unknown resolver name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resolver {0:?}, expected \"graph\" or \"table\"")]
pub struct InvalidResolverKind(String);

impl FromStr for ResolverKind {
    type Err = InvalidResolverKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph" => Ok(ResolverKind::Graph),
            "table" => Ok(ResolverKind::Table),
            _ => Err(InvalidResolverKind(s.to_string())),
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverKind::Graph => f.write_str("graph"),
            ResolverKind::Table => f.write_str("table"),
        }
    }
}

impl ResolverKind {
    /// How the distance matrix should be read for this strategy.
    ///
    /// The graph looks edges up in the direction they are declared; the
    /// table strategy needs both directions of every pair.
    pub fn load_mode(&self) -> LoadMode {
        match self {
            ResolverKind::Graph => LoadMode::Directed,
            ResolverKind::Table => LoadMode::Symmetric,
        }
    }

    /// The fare table tuned for this strategy.
    pub fn default_tariff(&self) -> Tariff {
        match self {
            ResolverKind::Graph => Tariff::hankyu(),
            ResolverKind::Table => Tariff::hankyu_matrix(),
        }
    }
}

/// Configuration parameters for journey pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Distance resolution strategy.
    pub resolver: ResolverKind,

    /// What the graph builder does with an edge that has no tabulated
    /// distance. Ignored by the table strategy, which never defaults.
    pub missing_edge: MissingEdgePolicy,

    /// Flat-rate pass price to compare totals against, if any.
    pub pass_price: Option<u32>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        resolver: ResolverKind,
        missing_edge: MissingEdgePolicy,
        pass_price: Option<u32>,
    ) -> Self {
        Self {
            resolver,
            missing_edge,
            pass_price,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverKind::Graph,
            missing_edge: MissingEdgePolicy::default(),
            pass_price: Some(DEFAULT_PASS_PRICE),
        }
    }
}
