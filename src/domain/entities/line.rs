//! Line aggregate: name, color, and an ordered chain of sections.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Section, Station};
use crate::error::AppError;

/// A transit line composed of an ordered chain of sections between stations.
///
/// The line is the aggregate root: sections are mutated only through
/// [`Line::add_section`] and [`Line::remove_section_by_station`], and the
/// whole aggregate is persisted in one transaction by the repository.
#[derive(Debug, Clone)]
pub struct Line {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub sections: Sections,
    pub created_at: DateTime<Utc>,
}

impl Line {
    pub fn new(
        id: i64,
        name: String,
        color: String,
        sections: Sections,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            color,
            sections,
            created_at,
        }
    }

    /// Replaces the line's name and color. Distance and sections are untouched.
    pub fn update(&mut self, name: String, color: String) {
        self.name = name;
        self.color = color;
    }

    /// Adds a section to the line's chain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the section cannot be attached;
    /// see [`Sections::add`] for the rules.
    pub fn add_section(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: i64,
    ) -> Result<(), AppError> {
        self.sections.add(up_station, down_station, distance)
    }

    /// Removes the given station from the line's chain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the station is not on the line or
    /// only one section remains.
    pub fn remove_section_by_station(&mut self, station: &Station) -> Result<(), AppError> {
        self.sections.remove_by_station(station.id)
    }

    /// Total line distance: the sum of all section distances.
    pub fn distance(&self) -> i64 {
        self.sections.total_distance()
    }

    /// Stations in chain order, first up-terminal to last down-terminal.
    pub fn stations(&self) -> Vec<&Station> {
        self.sections.stations()
    }
}

/// Input data for creating a new line from its first section.
#[derive(Debug, Clone)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub sections: Sections,
}

impl NewLine {
    /// Builds a transient line from two resolved stations and a distance.
    pub fn of(up_station: Station, down_station: Station, name: String, color: String, distance: i64) -> Self {
        Self {
            name,
            color,
            sections: Sections::single(Section::new(up_station, down_station, distance)),
        }
    }
}

/// Ordered section chain of one line, up-terminal first.
///
/// The vector order is the chain order; repositories persist it as an
/// explicit position column and restore it on load.
#[derive(Debug, Clone, Default)]
pub struct Sections(Vec<Section>);

impl Sections {
    pub fn new(sections: Vec<Section>) -> Self {
        Self(sections)
    }

    pub fn single(section: Section) -> Self {
        Self(vec![section])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_distance(&self) -> i64 {
        self.0.iter().map(|s| s.distance).sum()
    }

    /// Stations in chain order.
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations = Vec::with_capacity(self.0.len() + 1);
        if let Some(first) = self.0.first() {
            stations.push(&first.up_station);
        }
        stations.extend(self.0.iter().map(|s| &s.down_station));
        stations
    }

    fn contains(&self, station_id: i64) -> bool {
        self.0.iter().any(|s| s.touches(station_id))
    }

    /// Attaches a new section to the chain.
    ///
    /// Rules:
    /// - exactly one of the two stations must already be on the line;
    /// - appending at either terminal is always allowed;
    /// - inserting in the middle splits the overlapped section and requires
    ///   the new distance to be strictly smaller than the split distance.
    pub fn add(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: i64,
    ) -> Result<(), AppError> {
        if distance <= 0 {
            return Err(AppError::bad_request(
                "Section distance must be positive",
                json!({ "distance": distance }),
            ));
        }

        let has_up = self.contains(up_station.id);
        let has_down = self.contains(down_station.id);

        match (has_up, has_down) {
            (true, true) => Err(AppError::bad_request(
                "Both stations already belong to the line",
                json!({ "up_station_id": up_station.id, "down_station_id": down_station.id }),
            )),
            (false, false) => Err(AppError::bad_request(
                "Neither station belongs to the line",
                json!({ "up_station_id": up_station.id, "down_station_id": down_station.id }),
            )),
            (true, false) => self.attach_downward(up_station, down_station, distance),
            (false, true) => self.attach_upward(up_station, down_station, distance),
        }
    }

    /// The new section's up-station is on the line: append at the down
    /// terminal or split the section that starts at it.
    fn attach_downward(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: i64,
    ) -> Result<(), AppError> {
        let last_down = self.0.last().map(|s| s.down_station.id);
        if last_down == Some(up_station.id) {
            self.0.push(Section::new(up_station, down_station, distance));
            return Ok(());
        }

        let idx = self
            .0
            .iter()
            .position(|s| s.up_station.id == up_station.id)
            .ok_or_else(|| {
                AppError::bad_request(
                    "Section does not connect to the line",
                    json!({ "up_station_id": up_station.id }),
                )
            })?;

        self.split(idx, up_station, down_station, distance, true)
    }

    /// The new section's down-station is on the line: prepend at the up
    /// terminal or split the section that ends at it.
    fn attach_upward(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: i64,
    ) -> Result<(), AppError> {
        let first_up = self.0.first().map(|s| s.up_station.id);
        if first_up == Some(down_station.id) {
            self.0.insert(0, Section::new(up_station, down_station, distance));
            return Ok(());
        }

        let idx = self
            .0
            .iter()
            .position(|s| s.down_station.id == down_station.id)
            .ok_or_else(|| {
                AppError::bad_request(
                    "Section does not connect to the line",
                    json!({ "down_station_id": down_station.id }),
                )
            })?;

        self.split(idx, up_station, down_station, distance, false)
    }

    /// Splits `self.0[idx]` around the new section.
    ///
    /// `from_up` selects which end of the split section the new one shares.
    fn split(
        &mut self,
        idx: usize,
        up_station: Station,
        down_station: Station,
        distance: i64,
        from_up: bool,
    ) -> Result<(), AppError> {
        let old = self.0[idx].clone();
        if distance >= old.distance {
            return Err(AppError::bad_request(
                "Section distance must be smaller than the section it splits",
                json!({ "distance": distance, "existing_distance": old.distance }),
            ));
        }

        let remainder = old.distance - distance;
        if from_up {
            // old: up==new.up. Becomes new.up -> new.down -> old.down.
            let tail = Section::new(down_station.clone(), old.down_station, remainder);
            self.0[idx] = Section::new(up_station, down_station, distance);
            self.0.insert(idx + 1, tail);
        } else {
            // old: down==new.down. Becomes old.up -> new.up -> new.down.
            let head = Section::new(old.up_station, up_station.clone(), remainder);
            self.0[idx] = Section::new(up_station, down_station, distance);
            self.0.insert(idx, head);
        }

        Ok(())
    }

    /// Removes a station from the chain, merging its adjacent sections.
    pub fn remove_by_station(&mut self, station_id: i64) -> Result<(), AppError> {
        if !self.contains(station_id) {
            return Err(AppError::bad_request(
                "Station does not belong to the line",
                json!({ "station_id": station_id }),
            ));
        }

        if self.0.len() <= 1 {
            return Err(AppError::bad_request(
                "Cannot remove the only remaining section",
                json!({ "station_id": station_id }),
            ));
        }

        if self.0[0].up_station.id == station_id {
            self.0.remove(0);
            return Ok(());
        }

        let last = self.0.len() - 1;
        if self.0[last].down_station.id == station_id {
            self.0.remove(last);
            return Ok(());
        }

        // Middle station: merge the section ending at it with the one
        // starting at it, summing distances.
        let idx = self
            .0
            .iter()
            .position(|s| s.down_station.id == station_id)
            .ok_or_else(|| {
                AppError::bad_request(
                    "Station does not belong to the line",
                    json!({ "station_id": station_id }),
                )
            })?;

        let removed = self.0.remove(idx + 1);
        let merged_distance = self.0[idx].distance + removed.distance;
        self.0[idx] = Section::new(
            self.0[idx].up_station.clone(),
            removed.down_station,
            merged_distance,
        );

        Ok(())
    }
}
