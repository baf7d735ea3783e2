//! Event repository implementation.

use sqlx::{SqliteExecutor, SqlitePool};

use paralympics_core::error::{AppError, ErrorKind};
use paralympics_core::result::AppResult;
use paralympics_entity::event::{Event, NewEvent};

use super::map_write_error;

const INSERT_EVENT: &str = r#"
    INSERT INTO events (
        event_type, year, country, host, noc, start_date, end_date, duration,
        disabilities_included, countries, events, sports,
        participants_m, participants_f, participants, highlights
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Repository for Paralympic Games event records.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether at least one event row exists.
    pub async fn exists_any(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM events LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map(|first| first.is_some())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to probe events", e))
    }

    /// List all events in date order.
    pub async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY year, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    /// Find an event by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event by id", e))
    }

    /// Insert an event and return the stored row.
    pub async fn create(&self, event: &NewEvent) -> AppResult<Event> {
        let id = Self::insert_with(&self.pool, event).await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Event {id} vanished after insert")))
    }

    /// Insert an event through any executor and return its new id.
    pub async fn insert_with<'e>(
        executor: impl SqliteExecutor<'e>,
        event: &NewEvent,
    ) -> AppResult<i64> {
        let result = sqlx::query(INSERT_EVENT)
            .bind(&event.event_type)
            .bind(event.year)
            .bind(&event.country)
            .bind(&event.host)
            .bind(&event.noc)
            .bind(&event.start)
            .bind(&event.end)
            .bind(event.duration)
            .bind(&event.disabilities_included)
            .bind(event.countries)
            .bind(event.events)
            .bind(event.sports)
            .bind(event.participants_m)
            .bind(event.participants_f)
            .bind(event.participants)
            .bind(&event.highlights)
            .execute(executor)
            .await
            .map_err(|e| {
                map_write_error(e, &format!("Failed to insert event {} {}", event.year, event.host))
            })?;
        Ok(result.last_insert_rowid())
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all events.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;
        Ok(count as u64)
    }
}
