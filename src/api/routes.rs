//! API route configuration.

use crate::api::handlers::{
    add_section_handler, create_line_handler, create_station_handler, delete_line_handler,
    delete_station_handler, get_line_handler, line_list_handler, remove_section_handler,
    station_list_handler, update_line_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /lines`                - List lines
/// - `POST   /lines`                - Create a line from its first section
/// - `GET    /lines/{id}`           - Get one line
/// - `PUT    /lines/{id}`           - Update name and color
/// - `DELETE /lines/{id}`           - Delete a line and its sections
/// - `POST   /lines/{id}/sections`  - Add a section to the chain
/// - `DELETE /lines/{id}/sections`  - Remove a section by `?stationId=`
/// - `GET    /stations`             - List stations
/// - `POST   /stations`             - Create a station
/// - `DELETE /stations/{id}`        - Delete a station
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/lines", get(line_list_handler).post(create_line_handler))
        .route(
            "/lines/{id}",
            get(get_line_handler)
                .put(update_line_handler)
                .delete(delete_line_handler),
        )
        .route(
            "/lines/{id}/sections",
            post(add_section_handler).delete(remove_section_handler),
        )
        .route(
            "/stations",
            get(station_list_handler).post(create_station_handler),
        )
        .route("/stations/{id}", delete(delete_station_handler))
}
