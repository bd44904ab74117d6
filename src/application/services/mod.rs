//! Business logic services for the application layer.

pub mod line_service;
pub mod station_service;

pub use line_service::LineService;
pub use station_service::StationService;
