//! Handlers for line management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::line::{
    CreateLineRequest, LineListResponse, LineResponse, UpdateLineRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a line from its first section.
///
/// # Endpoint
///
/// `POST /api/lines`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if either station id does not resolve.
/// Returns 409 if the line name is taken.
pub async fn create_line_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLineRequest>,
) -> Result<(StatusCode, Json<LineResponse>), AppError> {
    payload.validate()?;

    let line = state
        .line_service
        .create_line(
            payload.name,
            payload.color,
            payload.distance,
            payload.up_station_id,
            payload.down_station_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(LineResponse::of(&line))))
}

/// Lists all lines.
///
/// # Endpoint
///
/// `GET /api/lines`
pub async fn line_list_handler(
    State(state): State<AppState>,
) -> Result<Json<LineListResponse>, AppError> {
    let lines = state.line_service.find_all_lines().await?;

    Ok(Json(LineListResponse {
        items: lines.iter().map(LineResponse::of).collect(),
    }))
}

/// Returns one line by id.
///
/// # Endpoint
///
/// `GET /api/lines/{id}`
///
/// # Errors
///
/// Returns 404 `line_not_found` if the id does not resolve.
pub async fn get_line_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.line_service.find_line_by_id(id).await?;
    Ok(Json(LineResponse::of(&line)))
}

/// Updates a line's name and color.
///
/// # Endpoint
///
/// `PUT /api/lines/{id}`
///
/// Distance and sections are untouched; the operation is idempotent.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 `line_not_found` if the id does not resolve.
pub async fn update_line_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLineRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .line_service
        .update_line(id, payload.name, payload.color)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a line and its sections.
///
/// # Endpoint
///
/// `DELETE /api/lines/{id}`
///
/// # Errors
///
/// Returns 404 `line_not_found` if the id does not resolve.
pub async fn delete_line_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.line_service.delete_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
