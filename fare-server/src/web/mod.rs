//! Web layer for the fare engine.
//!
//! Provides HTTP endpoints for listing stations and pricing journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
