//! DTOs for section mutation endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to add a section to a line.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSectionRequest {
    pub up_station_id: i64,
    pub down_station_id: i64,

    /// Must be positive; middle inserts additionally require it to be
    /// smaller than the section being split.
    #[validate(range(min = 1))]
    pub distance: i64,
}

/// Query parameters for section removal.
#[derive(Debug, Deserialize)]
pub struct RemoveSectionParams {
    #[serde(rename = "stationId")]
    pub station_id: i64,
}
