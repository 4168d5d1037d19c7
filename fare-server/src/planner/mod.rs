//! Journey fare planner.
//!
//! This module prices a journey of one or more legs: it validates the
//! requested stations, resolves each leg's distance with the configured
//! strategy, applies the tariff per leg, and compares the total against a
//! flat-rate pass.

mod config;
mod pricing;

pub use config::{InvalidResolverKind, PlannerConfig, ResolverKind};
pub use pricing::{JourneyPlanner, JourneyResult, LegResult};
