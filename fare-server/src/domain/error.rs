//! Domain error types.
//!
//! These errors are what a journey computation can report to its caller.
//! They are deterministic: the same input against the same reference data
//! always produces the same error.

use super::Station;

/// Errors from computing a journey fare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// A supplied station is not part of the known network
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// No distance could be resolved for a leg
    #[error("no route found from {from} to {to}")]
    NoRouteFound { from: Station, to: Station },

    /// Request is malformed (e.g., empty start or goal)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
