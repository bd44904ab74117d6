//! Section entity: a directed, distance-weighted edge between two stations.

use crate::domain::entities::Station;

/// A stretch of track between two adjacent stations on one line.
///
/// Sections are owned by their line and are never persisted or referenced
/// on their own. Direction runs up-station to down-station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub up_station: Station,
    pub down_station: Station,
    pub distance: i64,
}

impl Section {
    pub fn new(up_station: Station, down_station: Station, distance: i64) -> Self {
        Self {
            up_station,
            down_station,
            distance,
        }
    }

    /// Returns true if either end of this section is the given station.
    pub fn touches(&self, station_id: i64) -> bool {
        self.up_station.id == station_id || self.down_station.id == station_id
    }
}
