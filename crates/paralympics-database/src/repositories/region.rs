//! Region repository implementation.

use sqlx::{SqliteExecutor, SqlitePool};

use paralympics_core::error::{AppError, ErrorKind};
use paralympics_core::result::AppResult;
use paralympics_entity::region::Region;

use super::map_write_error;

/// Repository for region reference data.
#[derive(Debug, Clone)]
pub struct RegionRepository {
    pool: SqlitePool,
}

impl RegionRepository {
    /// Create a new region repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether at least one region row exists.
    pub async fn exists_any(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, String>("SELECT noc FROM regions LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map(|first| first.is_some())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to probe regions", e))
    }

    /// List all regions ordered by NOC code.
    pub async fn find_all(&self) -> AppResult<Vec<Region>> {
        sqlx::query_as::<_, Region>("SELECT noc, region, notes FROM regions ORDER BY noc")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list regions", e))
    }

    /// Find a region by NOC code.
    pub async fn find_by_noc(&self, noc: &str) -> AppResult<Option<Region>> {
        sqlx::query_as::<_, Region>("SELECT noc, region, notes FROM regions WHERE noc = ?")
            .bind(noc)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find region by NOC", e)
            })
    }

    /// Insert a region.
    pub async fn create(&self, region: &Region) -> AppResult<()> {
        Self::insert_with(&self.pool, region).await
    }

    /// Insert a region through any executor, e.g. an open transaction.
    pub async fn insert_with<'e>(
        executor: impl SqliteExecutor<'e>,
        region: &Region,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO regions (noc, region, notes) VALUES (?, ?, ?)")
            .bind(&region.noc)
            .bind(&region.region)
            .bind(&region.notes)
            .execute(executor)
            .await
            .map_err(|e| map_write_error(e, &format!("Failed to insert region {}", region.noc)))?;
        Ok(())
    }

    /// Delete a region. Returns `true` if a row was removed.
    pub async fn delete(&self, noc: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM regions WHERE noc = ?")
            .bind(noc)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete region", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all regions.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM regions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count regions", e))?;
        Ok(count as u64)
    }
}
