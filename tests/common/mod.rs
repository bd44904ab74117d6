#![allow(dead_code)]

//! Shared test fixtures: in-memory repositories and state wiring.
//!
//! The handler suites run against the real router and services with these
//! fakes behind the repository traits, so no database is required.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;

use subway_lines::application::services::{LineService, StationService};
use subway_lines::domain::entities::{Line, NewLine, NewStation, Station};
use subway_lines::domain::repositories::{LineRepository, StationRepository};
use subway_lines::error::AppError;
use subway_lines::state::AppState;

/// In-memory station store with id assignment and name uniqueness.
#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: Mutex<HashMap<i64, Station>>,
    next_id: AtomicI64,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self {
            stations: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn create(&self, new_station: NewStation) -> Result<Station, AppError> {
        let mut stations = self.stations.lock().unwrap();
        if stations.values().any(|s| s.name == new_station.name) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "name": new_station.name }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let station = Station::new(id, new_station.name, Utc::now());
        stations.insert(id, station.clone());
        Ok(station)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError> {
        Ok(self.stations.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Station>, AppError> {
        let mut all: Vec<Station> = self.stations.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.stations.lock().unwrap().remove(&id).is_some())
    }
}

/// In-memory line store with id assignment and name uniqueness.
#[derive(Default)]
pub struct InMemoryLineRepository {
    lines: Mutex<HashMap<i64, Line>>,
    next_id: AtomicI64,
}

impl InMemoryLineRepository {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LineRepository for InMemoryLineRepository {
    async fn create(&self, new_line: NewLine) -> Result<Line, AppError> {
        let mut lines = self.lines.lock().unwrap();
        if lines.values().any(|l| l.name == new_line.name) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "name": new_line.name }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let line = Line::new(id, new_line.name, new_line.color, new_line.sections, Utc::now());
        lines.insert(id, line.clone());
        Ok(line)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Line>, AppError> {
        Ok(self.lines.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Line>, AppError> {
        let mut all: Vec<Line> = self.lines.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|l| l.id);
        Ok(all)
    }

    async fn save(&self, line: &Line) -> Result<(), AppError> {
        let mut lines = self.lines.lock().unwrap();
        if !lines.contains_key(&line.id) {
            return Err(AppError::line_not_found(line.id));
        }
        lines.insert(line.id, line.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lines.lock().unwrap().remove(&id).is_some())
    }
}

/// Builds an application state wired over fresh in-memory repositories.
pub fn create_test_state() -> AppState {
    let line_repo = Arc::new(InMemoryLineRepository::new());
    let station_repo = Arc::new(InMemoryStationRepository::new());

    let line_service = Arc::new(LineService::new(line_repo, station_repo.clone()));
    let station_service = Arc::new(StationService::new(station_repo));

    AppState::new(line_service, station_service)
}

/// Creates a station through the API and returns its assigned id.
pub async fn create_station(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/stations")
        .json(&json!({ "name": name }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

/// Creates a line through the API and returns its assigned id.
pub async fn create_line(
    server: &TestServer,
    name: &str,
    color: &str,
    distance: i64,
    up_station_id: i64,
    down_station_id: i64,
) -> i64 {
    let response = server
        .post("/api/lines")
        .json(&json!({
            "name": name,
            "color": color,
            "distance": distance,
            "up_station_id": up_station_id,
            "down_station_id": down_station_id,
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

/// Station ids of a line response body, in chain order.
pub fn station_ids(body: &serde_json::Value) -> Vec<i64> {
    body["stations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect()
}
