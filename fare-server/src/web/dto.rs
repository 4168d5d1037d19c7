//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::fare::PassComparison;
use crate::planner::{JourneyResult, LegResult};

/// Query for a fare calculation.
#[derive(Debug, Deserialize)]
pub struct CalcRequest {
    /// Start station name
    pub start: Option<String>,

    /// Goal station name
    pub goal: Option<String>,

    /// Comma-separated stopover station names
    pub stops: Option<String>,
}

impl CalcRequest {
    /// Stopovers in order, with empty segments dropped.
    pub fn stop_list(&self) -> Vec<&str> {
        self.stops
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Response for a fare calculation.
#[derive(Debug, Serialize)]
pub struct CalcResponse {
    /// Stations in travel order
    pub journey_order: Vec<String>,

    /// Total distance, rounded to 0.1 km
    pub total_distance_km: f64,

    /// Total fare in yen
    pub total_fare: u32,

    /// Per-leg breakdown
    pub details: Vec<LegDetail>,

    /// Flat-rate pass comparison, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<PassResult>,
}

/// One leg in a fare calculation.
#[derive(Debug, Serialize)]
pub struct LegDetail {
    /// Leg start station
    pub start: String,

    /// Leg goal station
    pub goal: String,

    /// Leg distance, rounded to 0.1 km
    pub distance_km: f64,

    /// Leg fare in yen
    pub fare: u32,

    /// Stations passed through
    pub route: Vec<String>,
}

/// Flat-rate pass comparison.
#[derive(Debug, Serialize)]
pub struct PassResult {
    /// Pass price in yen
    pub price: u32,

    /// `pass_cheaper`, `normal_cheaper` or `equal`
    pub verdict: &'static str,

    /// Yen saved by the cheaper option
    pub savings: u32,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Round a distance to one decimal place for display.
fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

fn names(stations: &[Station]) -> Vec<String> {
    stations.iter().map(|s| s.as_str().to_string()).collect()
}

impl CalcResponse {
    /// Convert a priced journey for the wire.
    pub fn from_result(result: &JourneyResult) -> Self {
        Self {
            journey_order: names(&result.journey_order),
            total_distance_km: round_km(result.total_distance_km),
            total_fare: result.total_fare,
            details: result.legs.iter().map(LegDetail::from_leg).collect(),
            pass: result.pass.as_ref().map(PassResult::from_comparison),
        }
    }
}

impl LegDetail {
    /// Convert a priced leg for the wire.
    pub fn from_leg(leg: &LegResult) -> Self {
        Self {
            start: leg.from.as_str().to_string(),
            goal: leg.to.as_str().to_string(),
            distance_km: round_km(leg.distance_km),
            fare: leg.fare,
            route: names(&leg.path),
        }
    }
}

impl PassResult {
    /// Convert a pass comparison for the wire.
    pub fn from_comparison(pass: &PassComparison) -> Self {
        Self {
            price: pass.pass_price,
            verdict: pass.verdict.as_str(),
            savings: pass.savings,
        }
    }
}
