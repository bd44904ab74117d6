//! Line lifecycle and section-mutation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Line, NewLine, Station};
use crate::domain::repositories::{LineRepository, StationRepository};
use crate::error::AppError;

/// Service implementing the line use cases: create, list, get, update,
/// delete, add-section, and remove-section.
///
/// Every operation resolves referenced entity ids first and fails fast when
/// one is missing, so no mutation ever runs against a half-resolved request.
/// Durability is delegated entirely to the repositories; the service holds
/// no state of its own.
pub struct LineService {
    line_repository: Arc<dyn LineRepository>,
    station_repository: Arc<dyn StationRepository>,
}

impl LineService {
    /// Creates a new line service.
    pub fn new(
        line_repository: Arc<dyn LineRepository>,
        station_repository: Arc<dyn StationRepository>,
    ) -> Self {
        Self {
            line_repository,
            station_repository,
        }
    }

    /// Creates and persists a line from its first section.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EntityNotFound`] if either station id is
    /// unresolvable. Returns [`AppError::Conflict`] if the line name is
    /// taken.
    pub async fn create_line(
        &self,
        name: String,
        color: String,
        distance: i64,
        up_station_id: i64,
        down_station_id: i64,
    ) -> Result<Line, AppError> {
        let up_station = self.get_station(up_station_id).await?;
        let down_station = self.get_station(down_station_id).await?;

        let new_line = NewLine::of(up_station, down_station, name, color, distance);
        self.line_repository.create(new_line).await
    }

    /// Lists all lines in repository natural order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all_lines(&self) -> Result<Vec<Line>, AppError> {
        self.line_repository.find_all().await
    }

    /// Retrieves a line by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LineNotFound`] carrying the id if absent.
    pub async fn find_line_by_id(&self, id: i64) -> Result<Line, AppError> {
        self.line_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::line_not_found(id))
    }

    /// Updates a line's name and color. Distance and sections are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LineNotFound`] carrying the id if absent.
    pub async fn update_line(&self, id: i64, name: String, color: String) -> Result<(), AppError> {
        let mut line = self.find_line_by_id(id).await?;
        line.update(name, color);
        self.line_repository.save(&line).await
    }

    /// Deletes a line by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LineNotFound`] carrying the id if absent.
    pub async fn delete_line(&self, id: i64) -> Result<(), AppError> {
        let line = self.find_line_by_id(id).await?;
        let deleted = self.line_repository.delete(line.id).await?;
        if !deleted {
            return Err(AppError::line_not_found(id));
        }
        Ok(())
    }

    /// Adds a section to a line and persists the updated aggregate.
    ///
    /// Stations are resolved before the line is fetched, so a bad station id
    /// never reaches the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EntityNotFound`] if a station id is unresolvable,
    /// [`AppError::LineNotFound`] if the line id is unresolvable, or
    /// [`AppError::Validation`] if the section cannot be attached to the
    /// chain.
    pub async fn add_section(
        &self,
        line_id: i64,
        up_station_id: i64,
        down_station_id: i64,
        distance: i64,
    ) -> Result<Line, AppError> {
        let up_station = self.get_station(up_station_id).await?;
        let down_station = self.get_station(down_station_id).await?;
        let mut line = self.find_line_by_id(line_id).await?;

        line.add_section(up_station, down_station, distance)?;

        self.line_repository.save(&line).await?;
        Ok(line)
    }

    /// Removes the section touching a station and persists the updated
    /// aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EntityNotFound`] if the station id is
    /// unresolvable, [`AppError::LineNotFound`] if the line id is
    /// unresolvable, or [`AppError::Validation`] if the removal would leave
    /// the line without a section.
    pub async fn remove_section_by_station(
        &self,
        line_id: i64,
        station_id: i64,
    ) -> Result<Line, AppError> {
        let target_station = self.get_station(station_id).await?;
        let mut line = self.find_line_by_id(line_id).await?;

        line.remove_section_by_station(&target_station)?;

        self.line_repository.save(&line).await?;
        Ok(line)
    }

    async fn get_station(&self, id: i64) -> Result<Station, AppError> {
        self.station_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Station not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Section, Sections};
    use crate::domain::repositories::{MockLineRepository, MockStationRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn test_station(id: i64, name: &str) -> Station {
        Station::new(id, name.to_string(), Utc::now())
    }

    fn test_line(id: i64, name: &str, color: &str) -> Line {
        Line::new(
            id,
            name.to_string(),
            color.to_string(),
            Sections::single(Section::new(
                test_station(1, "강남역"),
                test_station(2, "역삼역"),
                10,
            )),
            Utc::now(),
        )
    }

    fn service(
        line_repo: MockLineRepository,
        station_repo: MockStationRepository,
    ) -> LineService {
        LineService::new(Arc::new(line_repo), Arc::new(station_repo))
    }

    #[tokio::test]
    async fn test_create_line_resolves_stations_and_persists() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(test_station(id, "강남역"))));
        station_repo
            .expect_find_by_id()
            .with(eq(2))
            .times(1)
            .returning(|id| Ok(Some(test_station(id, "역삼역"))));

        line_repo
            .expect_create()
            .withf(|new_line| {
                new_line.name == "2호선" && new_line.sections.total_distance() == 10
            })
            .times(1)
            .returning(|_| Ok(test_line(7, "2호선", "green")));

        let service = service(line_repo, station_repo);

        let line = service
            .create_line("2호선".to_string(), "green".to_string(), 10, 1, 2)
            .await
            .unwrap();

        assert_eq!(line.id, 7);
        let station_ids: Vec<i64> = line.stations().iter().map(|s| s.id).collect();
        assert_eq!(station_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_line_missing_station_fails_before_persist() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(None));

        line_repo.expect_create().times(0);

        let service = service(line_repo, station_repo);

        let err = service
            .create_line("2호선".to_string(), "green".to_string(), 10, 1, 2)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EntityNotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_line_by_id_not_found_carries_id() {
        let mut line_repo = MockLineRepository::new();
        let station_repo = MockStationRepository::new();

        line_repo
            .expect_find_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let service = service(line_repo, station_repo);

        let err = service.find_line_by_id(99).await.unwrap_err();
        assert!(matches!(err, AppError::LineNotFound { id: 99 }));
    }

    #[tokio::test]
    async fn test_find_all_lines_empty() {
        let mut line_repo = MockLineRepository::new();
        let station_repo = MockStationRepository::new();

        line_repo.expect_find_all().times(1).returning(|| Ok(vec![]));

        let service = service(line_repo, station_repo);

        assert!(service.find_all_lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_line_saves_new_attributes() {
        let mut line_repo = MockLineRepository::new();
        let station_repo = MockStationRepository::new();

        line_repo
            .expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(Some(test_line(7, "2호선", "green"))));

        line_repo
            .expect_save()
            .withf(|line| line.name == "2호선" && line.color == "red")
            .times(1)
            .returning(|_| Ok(()));

        let service = service(line_repo, station_repo);

        service
            .update_line(7, "2호선".to_string(), "red".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_line_not_found_writes_nothing() {
        let mut line_repo = MockLineRepository::new();
        let station_repo = MockStationRepository::new();

        line_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        line_repo.expect_save().times(0);

        let service = service(line_repo, station_repo);

        let err = service
            .update_line(5, "x".to_string(), "y".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LineNotFound { id: 5 }));
    }

    #[tokio::test]
    async fn test_delete_line_fetches_then_deletes() {
        let mut line_repo = MockLineRepository::new();
        let station_repo = MockStationRepository::new();

        line_repo
            .expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(Some(test_line(7, "2호선", "green"))));
        line_repo
            .expect_delete()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(true));

        let service = service(line_repo, station_repo);

        service.delete_line(7).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_line_not_found() {
        let mut line_repo = MockLineRepository::new();
        let station_repo = MockStationRepository::new();

        line_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        line_repo.expect_delete().times(0);

        let service = service(line_repo, station_repo);

        let err = service.delete_line(3).await.unwrap_err();
        assert!(matches!(err, AppError::LineNotFound { id: 3 }));
    }

    #[tokio::test]
    async fn test_add_section_persists_updated_aggregate() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .with(eq(2))
            .times(1)
            .returning(|id| Ok(Some(test_station(id, "역삼역"))));
        station_repo
            .expect_find_by_id()
            .with(eq(3))
            .times(1)
            .returning(|id| Ok(Some(test_station(id, "선릉역"))));

        line_repo
            .expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(Some(test_line(7, "2호선", "green"))));

        line_repo
            .expect_save()
            .withf(|line| line.sections.len() == 2 && line.distance() == 15)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(line_repo, station_repo);

        let line = service.add_section(7, 2, 3, 5).await.unwrap();
        let station_ids: Vec<i64> = line.stations().iter().map(|s| s.id).collect();
        assert_eq!(station_ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_add_section_missing_station_skips_line_fetch() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(None));

        line_repo.expect_find_by_id().times(0);
        line_repo.expect_save().times(0);

        let service = service(line_repo, station_repo);

        let err = service.add_section(7, 42, 3, 5).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_section_line_not_found() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .times(2)
            .returning(|id| Ok(Some(test_station(id, "역"))));

        line_repo
            .expect_find_by_id()
            .with(eq(55))
            .times(1)
            .returning(|_| Ok(None));
        line_repo.expect_save().times(0);

        let service = service(line_repo, station_repo);

        let err = service.add_section(55, 2, 3, 5).await.unwrap_err();
        assert!(matches!(err, AppError::LineNotFound { id: 55 }));
    }

    #[tokio::test]
    async fn test_add_section_domain_rejection_propagates() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        // Both stations already belong to the line's only section.
        station_repo
            .expect_find_by_id()
            .times(2)
            .returning(|id| Ok(Some(test_station(id, "역"))));

        line_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_line(7, "2호선", "green"))));
        line_repo.expect_save().times(0);

        let service = service(line_repo, station_repo);

        let err = service.add_section(7, 1, 2, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_remove_section_merges_and_saves() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .with(eq(2))
            .times(1)
            .returning(|id| Ok(Some(test_station(id, "역삼역"))));

        line_repo.expect_find_by_id().with(eq(7)).times(1).returning(|_| {
            let mut line = test_line(7, "2호선", "green");
            line.add_section(test_station(2, "역삼역"), test_station(3, "선릉역"), 5)
                .unwrap();
            Ok(Some(line))
        });

        line_repo
            .expect_save()
            .withf(|line| line.sections.len() == 1 && line.distance() == 15)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(line_repo, station_repo);

        let line = service.remove_section_by_station(7, 2).await.unwrap();
        let station_ids: Vec<i64> = line.stations().iter().map(|s| s.id).collect();
        assert_eq!(station_ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_remove_section_last_section_rejected() {
        let mut line_repo = MockLineRepository::new();
        let mut station_repo = MockStationRepository::new();

        station_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(test_station(id, "강남역"))));

        line_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_line(7, "2호선", "green"))));
        line_repo.expect_save().times(0);

        let service = service(line_repo, station_repo);

        let err = service.remove_section_by_station(7, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
