//! DTOs for line management endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::api::dto::station::StationItem;
use crate::domain::entities::Line;

/// Compiled regex for line color validation (e.g. "green", "bg-red-600", "#festa").
static COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9#_-]+$").unwrap());

/// Request to create a line from its first section.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLineRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*COLOR_REGEX", message = "Invalid color format"))]
    pub color: String,

    /// Distance of the initial section. Must be positive.
    #[validate(range(min = 1))]
    pub distance: i64,

    pub up_station_id: i64,
    pub down_station_id: i64,
}

/// Request to rename or recolor a line. Distance and sections are untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLineRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*COLOR_REGEX", message = "Invalid color format"))]
    pub color: String,
}

/// JSON representation of a line with its ordered station walk.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    /// Sum of all section distances.
    pub distance: i64,
    /// Stations in chain order, up-terminal first.
    pub stations: Vec<StationItem>,
    pub created_at: DateTime<Utc>,
}

impl LineResponse {
    pub fn of(line: &Line) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            color: line.color.clone(),
            distance: line.distance(),
            stations: line.stations().into_iter().map(StationItem::of).collect(),
            created_at: line.created_at,
        }
    }
}

/// Response wrapping the full line list.
#[derive(Debug, Serialize)]
pub struct LineListResponse {
    pub items: Vec<LineResponse>,
}
