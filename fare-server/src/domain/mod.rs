//! Domain types for the fare engine.
//!
//! This module contains the validated core types shared by the network,
//! resolver and planner layers. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod journey;
mod station;

pub use error::FareError;
pub use journey::{Journey, Leg};
pub use station::{InvalidStation, Station};
