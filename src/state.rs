//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LineService, StationService};

/// Application state holding the wired service layer.
///
/// Services hold their repositories behind trait objects, so tests can
/// assemble a state over in-memory fakes without touching PostgreSQL.
#[derive(Clone)]
pub struct AppState {
    pub line_service: Arc<LineService>,
    pub station_service: Arc<StationService>,
}

impl AppState {
    pub fn new(line_service: Arc<LineService>, station_service: Arc<StationService>) -> Self {
        Self {
            line_service,
            station_service,
        }
    }
}
