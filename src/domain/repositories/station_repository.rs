//! Repository trait for station data access.

use crate::domain::entities::{NewStation, Station};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stations.
///
/// The line service only consumes [`StationRepository::find_by_id`]; the
/// remaining operations back the station management endpoints.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Creates a new station.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the station name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_station: NewStation) -> Result<Station, AppError>;

    /// Finds a station by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Station))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError>;

    /// Lists all stations in natural (id) order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Station>, AppError>;

    /// Deletes a station.
    ///
    /// Returns `Ok(true)` if the station was found and deleted, `Ok(false)`
    /// if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the station is still referenced by
    /// a line section.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
