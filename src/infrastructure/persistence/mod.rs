//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgLineRepository`] - Line aggregate storage with transactional section writes
//! - [`PgStationRepository`] - Station storage and retrieval

pub mod pg_line_repository;
pub mod pg_station_repository;

pub use pg_line_repository::PgLineRepository;
pub use pg_station_repository::PgStationRepository;
