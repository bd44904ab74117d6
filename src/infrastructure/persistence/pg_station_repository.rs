//! PostgreSQL implementation of the station repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStation, Station};
use crate::domain::repositories::StationRepository;
use crate::error::AppError;

/// PostgreSQL repository for station storage and retrieval.
pub struct PgStationRepository {
    pool: Arc<PgPool>,
}

impl PgStationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StationRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl StationRow {
    fn into_station(self) -> Station {
        Station::new(self.id, self.name, self.created_at)
    }
}

#[async_trait]
impl StationRepository for PgStationRepository {
    async fn create(&self, new_station: NewStation) -> Result<Station, AppError> {
        let row: StationRow = sqlx::query_as(
            r#"
            INSERT INTO stations (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(&new_station.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into_station())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError> {
        let row: Option<StationRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stations WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(StationRow::into_station))
    }

    async fn find_all(&self) -> Result<Vec<Station>, AppError> {
        let rows: Vec<StationRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stations ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(StationRow::into_station).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // Fails with a foreign key violation (mapped to Conflict) when the
        // station is still referenced by a section.
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
