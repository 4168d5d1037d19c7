//! Multi-leg train fare server.
//!
//! Prices journeys on the Hankyu network: each leg between consecutive
//! stops is measured and priced on its own distance, the legs are summed,
//! and the total is compared against a flat-rate day pass.

pub mod config;
pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
pub mod resolver;
pub mod web;
