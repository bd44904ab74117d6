//! PostgreSQL implementation of the line repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{Line, NewLine, Section, Sections, Station};
use crate::domain::repositories::LineRepository;
use crate::error::AppError;

/// PostgreSQL repository for line aggregates.
///
/// The section chain lives in a child table keyed by an explicit position
/// column. Mutations rewrite the chain together with the line row inside a
/// single transaction, so readers never observe a partially written
/// aggregate.
pub struct PgLineRepository {
    pool: Arc<PgPool>,
}

impl PgLineRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_sections(&self, line_id: i64) -> Result<Sections, AppError> {
        let rows: Vec<SectionRow> = sqlx::query_as(
            r#"
            SELECT s.line_id, s.distance,
                   us.id AS up_id, us.name AS up_name, us.created_at AS up_created_at,
                   ds.id AS down_id, ds.name AS down_name, ds.created_at AS down_created_at
            FROM sections s
            JOIN stations us ON us.id = s.up_station_id
            JOIN stations ds ON ds.id = s.down_station_id
            WHERE s.line_id = $1
            ORDER BY s.position
            "#,
        )
        .bind(line_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Sections::new(rows.into_iter().map(SectionRow::into_section).collect()))
    }

    async fn insert_sections(
        tx: &mut Transaction<'_, Postgres>,
        line_id: i64,
        sections: &Sections,
    ) -> Result<(), AppError> {
        for (position, section) in sections.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO sections (line_id, up_station_id, down_station_id, distance, position)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(line_id)
            .bind(section.up_station.id)
            .bind(section.down_station.id)
            .bind(section.distance)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct LineRow {
    id: i64,
    name: String,
    color: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct SectionRow {
    line_id: i64,
    distance: i64,
    up_id: i64,
    up_name: String,
    up_created_at: DateTime<Utc>,
    down_id: i64,
    down_name: String,
    down_created_at: DateTime<Utc>,
}

impl SectionRow {
    fn into_section(self) -> Section {
        Section::new(
            Station::new(self.up_id, self.up_name, self.up_created_at),
            Station::new(self.down_id, self.down_name, self.down_created_at),
            self.distance,
        )
    }
}

#[async_trait]
impl LineRepository for PgLineRepository {
    async fn create(&self, new_line: NewLine) -> Result<Line, AppError> {
        let mut tx = self.pool.begin().await?;

        let row: LineRow = sqlx::query_as(
            r#"
            INSERT INTO lines (name, color)
            VALUES ($1, $2)
            RETURNING id, name, color, created_at
            "#,
        )
        .bind(&new_line.name)
        .bind(&new_line.color)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_sections(&mut tx, row.id, &new_line.sections).await?;

        tx.commit().await?;

        Ok(Line::new(
            row.id,
            row.name,
            row.color,
            new_line.sections,
            row.created_at,
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Line>, AppError> {
        let row: Option<LineRow> = sqlx::query_as(
            "SELECT id, name, color, created_at FROM lines WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sections = self.load_sections(row.id).await?;

        Ok(Some(Line::new(
            row.id,
            row.name,
            row.color,
            sections,
            row.created_at,
        )))
    }

    async fn find_all(&self) -> Result<Vec<Line>, AppError> {
        let line_rows: Vec<LineRow> =
            sqlx::query_as("SELECT id, name, color, created_at FROM lines ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        let section_rows: Vec<SectionRow> = sqlx::query_as(
            r#"
            SELECT s.line_id, s.distance,
                   us.id AS up_id, us.name AS up_name, us.created_at AS up_created_at,
                   ds.id AS down_id, ds.name AS down_name, ds.created_at AS down_created_at
            FROM sections s
            JOIN stations us ON us.id = s.up_station_id
            JOIN stations ds ON ds.id = s.down_station_id
            ORDER BY s.line_id, s.position
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut lines = Vec::with_capacity(line_rows.len());
        for row in line_rows {
            let sections: Vec<Section> = section_rows
                .iter()
                .filter(|s| s.line_id == row.id)
                .map(|s| {
                    Section::new(
                        Station::new(s.up_id, s.up_name.clone(), s.up_created_at),
                        Station::new(s.down_id, s.down_name.clone(), s.down_created_at),
                        s.distance,
                    )
                })
                .collect();

            lines.push(Line::new(
                row.id,
                row.name,
                row.color,
                Sections::new(sections),
                row.created_at,
            ));
        }

        Ok(lines)
    }

    async fn save(&self, line: &Line) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE lines SET name = $1, color = $2 WHERE id = $3")
            .bind(&line.name)
            .bind(&line.color)
            .bind(line.id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::line_not_found(line.id));
        }

        sqlx::query("DELETE FROM sections WHERE line_id = $1")
            .bind(line.id)
            .execute(&mut *tx)
            .await?;

        Self::insert_sections(&mut tx, line.id, &line.sections).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // Sections go with the line via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM lines WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
