//! Repository trait for line aggregate data access.

use crate::domain::entities::{Line, NewLine};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing line aggregates.
///
/// The line and its section chain are read and written as one unit: every
/// mutating operation runs inside a single database transaction so a line is
/// never observable with a partially written chain.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLineRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineRepository: Send + Sync {
    /// Persists a transient line and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the line name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_line: NewLine) -> Result<Line, AppError>;

    /// Finds a line by id, with its full section chain in order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Line))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Line>, AppError>;

    /// Lists all lines in natural (id) order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Line>, AppError>;

    /// Persists a mutated aggregate: line attributes and the rewritten
    /// section chain, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LineNotFound`] if the line no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, line: &Line) -> Result<(), AppError>;

    /// Deletes a line and its sections.
    ///
    /// Returns `Ok(true)` if the line was found and deleted, `Ok(false)`
    /// if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
