//! DTOs for station management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Station;

/// Request to create a station.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// JSON representation of a station.
#[derive(Debug, Serialize)]
pub struct StationItem {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl StationItem {
    pub fn of(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name.clone(),
            created_at: station.created_at,
        }
    }
}

/// Response wrapping the full station list.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub items: Vec<StationItem>,
}
