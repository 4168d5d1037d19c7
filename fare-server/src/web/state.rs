//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::JourneyPlanner;

/// Shared application state.
///
/// The planner is absent when reference data failed to load at start-up;
/// fare endpoints then answer 503 while `/health` keeps working.
#[derive(Clone, Default)]
pub struct AppState {
    /// Journey planner, if reference data loaded
    pub planner: Option<Arc<JourneyPlanner>>,
}

impl AppState {
    /// Create app state serving the given planner.
    pub fn new(planner: JourneyPlanner) -> Self {
        Self {
            planner: Some(Arc::new(planner)),
        }
    }

    /// Create app state with no planner.
    pub fn unavailable() -> Self {
        Self::default()
    }
}
