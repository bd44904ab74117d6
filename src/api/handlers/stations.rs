//! Handlers for station management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::station::{CreateStationRequest, StationItem, StationListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a station.
///
/// # Endpoint
///
/// `POST /api/stations`
///
/// # Errors
///
/// Returns 400 if the name is empty.
/// Returns 409 if the name already exists.
pub async fn create_station_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<StationItem>), AppError> {
    payload.validate()?;

    let station = state.station_service.create_station(payload.name).await?;

    Ok((StatusCode::CREATED, Json(StationItem::of(&station))))
}

/// Lists all stations.
///
/// # Endpoint
///
/// `GET /api/stations`
pub async fn station_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let stations = state.station_service.find_all_stations().await?;

    Ok(Json(StationListResponse {
        items: stations.iter().map(StationItem::of).collect(),
    }))
}

/// Deletes a station.
///
/// # Endpoint
///
/// `DELETE /api/stations/{id}`
///
/// # Errors
///
/// Returns 404 `entity_not_found` if the id does not resolve.
/// Returns 409 if the station is still referenced by a line section.
pub async fn delete_station_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.station_service.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
