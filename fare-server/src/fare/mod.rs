//! Fare calculation.
//!
//! Turns a leg distance into a fare through a banded [`Tariff`], and
//! compares a journey total against a flat-rate pass.

mod pass;
mod tariff;

pub use pass::{DEFAULT_PASS_PRICE, PassComparison, PassVerdict};
pub use tariff::{Band, Tariff, TariffError};
