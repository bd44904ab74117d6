//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod lines;
pub mod sections;
pub mod stations;

pub use health::health_handler;
pub use lines::{
    create_line_handler, delete_line_handler, get_line_handler, line_list_handler,
    update_line_handler,
};
pub use sections::{add_section_handler, remove_section_handler};
pub use stations::{create_station_handler, delete_station_handler, station_list_handler};
