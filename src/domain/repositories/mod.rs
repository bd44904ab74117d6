//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LineRepository`] - Line aggregate CRUD with atomic section writes
//! - [`StationRepository`] - Station lookup and management

pub mod line_repository;
pub mod station_repository;

pub use line_repository::LineRepository;
pub use station_repository::StationRepository;

#[cfg(test)]
pub use line_repository::MockLineRepository;
#[cfg(test)]
pub use station_repository::MockStationRepository;
