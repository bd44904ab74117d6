//! Core domain entities representing the transit network data model.
//!
//! # Entity Types
//!
//! - [`Line`] - A transit line with its ordered section chain
//! - [`Section`] - A directed edge between two stations, owned by its line
//! - [`Station`] - A point entity referenced by sections
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewLine` and `NewStation` represent transient records before the
//! repository assigns an id.

pub mod line;
pub mod section;
pub mod station;

pub use line::{Line, NewLine, Sections};
pub use section::Section;
pub use station::{NewStation, Station};
