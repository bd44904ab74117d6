//! Station entity referenced by line sections.

use chrono::{DateTime, Utc};

/// A point on the network that sections connect.
///
/// Stations are managed independently of lines; the line service only ever
/// reads them by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Station {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

/// Input data for creating a new station.
#[derive(Debug, Clone)]
pub struct NewStation {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_creation() {
        let now = Utc::now();
        let station = Station::new(1, "강남역".to_string(), now);

        assert_eq!(station.id, 1);
        assert_eq!(station.name, "강남역");
        assert_eq!(station.created_at, now);
    }
}
