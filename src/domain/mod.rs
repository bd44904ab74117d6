//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and aggregate logic
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Section-chain invariants are enforced inside the [`entities::Line`]
//!   aggregate, never by callers mutating fields directly

pub mod entities;
pub mod repositories;
