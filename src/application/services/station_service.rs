//! Station management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewStation, Station};
use crate::domain::repositories::StationRepository;
use crate::error::AppError;

/// Service for managing the stations that lines connect.
pub struct StationService {
    repository: Arc<dyn StationRepository>,
}

impl StationService {
    /// Creates a new station service.
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new station.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty.
    /// Returns [`AppError::Conflict`] if the name already exists.
    pub async fn create_station(&self, name: String) -> Result<Station, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Station name must not be empty",
                json!({}),
            ));
        }

        self.repository.create(NewStation { name }).await
    }

    /// Lists all stations in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all_stations(&self) -> Result<Vec<Station>, AppError> {
        self.repository.find_all().await
    }

    /// Deletes a station by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EntityNotFound`] if the station does not exist.
    /// Returns [`AppError::Conflict`] if a line section still references it.
    pub async fn delete_station(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::entity_not_found(
                "Station not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}
