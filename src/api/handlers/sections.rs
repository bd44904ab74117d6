//! Handlers for section mutation endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::line::LineResponse;
use crate::api::dto::section::{AddSectionRequest, RemoveSectionParams};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a section to a line's chain.
///
/// # Endpoint
///
/// `POST /api/lines/{id}/sections`
///
/// # Errors
///
/// Returns 400 if validation fails or the section cannot be attached
/// (both/neither station on the line, oversized split distance).
/// Returns 404 `entity_not_found` if a station id does not resolve.
/// Returns 404 `line_not_found` if the line id does not resolve.
pub async fn add_section_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<AddSectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    payload.validate()?;

    let line = state
        .line_service
        .add_section(
            id,
            payload.up_station_id,
            payload.down_station_id,
            payload.distance,
        )
        .await?;

    Ok(Json(LineResponse::of(&line)))
}

/// Removes the section touching a station from a line's chain.
///
/// # Endpoint
///
/// `DELETE /api/lines/{id}/sections?stationId={stationId}`
///
/// # Errors
///
/// Returns 400 if the station is not on the line or only one section
/// remains.
/// Returns 404 `entity_not_found` if the station id does not resolve.
/// Returns 404 `line_not_found` if the line id does not resolve.
pub async fn remove_section_handler(
    Path(id): Path<i64>,
    Query(params): Query<RemoveSectionParams>,
    State(state): State<AppState>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .line_service
        .remove_section_by_station(id, params.station_id)
        .await?;

    Ok(Json(LineResponse::of(&line)))
}
