//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and aggregate mutations. Services consume repository
//! traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::line_service::LineService`] - Line lifecycle and section mutations
//! - [`services::station_service::StationService`] - Station management

pub mod services;
