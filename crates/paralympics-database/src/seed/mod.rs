//! Startup seeding of reference and event data from CSV.
//!
//! Each dataset is loaded only when its table is completely empty. The
//! probe is per table, not per row: if some rows were deleted by hand,
//! re-running the seeder will not restore them, and it never detects
//! duplicates at row level.
//!
//! Regions and events are committed in separate transactions. A failure
//! while loading events leaves the already committed regions in place.

pub mod error;
pub mod rows;

use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use sqlx::SqlitePool;
use tracing::info;

use paralympics_core::config::SeedConfig;
use paralympics_core::error::{AppError, ErrorKind};

use crate::repositories::{EventRepository, RegionRepository};

pub use error::SeedError;
pub use rows::RowError;

/// Loads the region and event CSV files into an empty database.
#[derive(Debug, Clone)]
pub struct Seeder {
    pool: SqlitePool,
    regions: RegionRepository,
    events: EventRepository,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a seeder over the given pool.
    pub fn new(pool: SqlitePool, config: SeedConfig) -> Self {
        Self {
            regions: RegionRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            pool,
            config,
        }
    }

    /// Seed regions, then events. Each step is skipped if its table already
    /// has at least one row.
    pub async fn seed(&self) -> Result<(), SeedError> {
        self.seed_regions().await?;
        self.seed_events().await?;
        Ok(())
    }

    async fn seed_regions(&self) -> Result<(), SeedError> {
        if self.regions.exists_any().await? {
            info!("Regions already present, skipping region seed");
            return Ok(());
        }

        let path = &self.config.regions_csv;
        info!(path = %path.display(), "Start adding region data to the database");

        let regions = read_rows(path, rows::region_from_record)?;

        let mut tx = self.begin().await?;
        for region in &regions {
            RegionRepository::insert_with(&mut *tx, region).await?;
        }
        commit(tx).await?;

        info!(rows = regions.len(), "Region data added");
        Ok(())
    }

    async fn seed_events(&self) -> Result<(), SeedError> {
        if self.events.exists_any().await? {
            info!("Events already present, skipping event seed");
            return Ok(());
        }

        let path = &self.config.events_csv;
        info!(path = %path.display(), "Start adding event data to the database");

        let events = read_rows(path, rows::event_from_record)?;

        let mut tx = self.begin().await?;
        for event in &events {
            EventRepository::insert_with(&mut *tx, event).await?;
        }
        commit(tx).await?;

        info!(rows = events.len(), "Event data added");
        Ok(())
    }

    async fn begin(&self) -> Result<sqlx::Transaction<'static, sqlx::Sqlite>, SeedError> {
        self.pool.begin().await.map_err(|e| {
            SeedError::Store(AppError::with_source(
                ErrorKind::Database,
                "Failed to begin seed transaction",
                e,
            ))
        })
    }
}

async fn commit(tx: sqlx::Transaction<'static, sqlx::Sqlite>) -> Result<(), SeedError> {
    tx.commit().await.map_err(|e| {
        SeedError::Store(AppError::with_source(
            ErrorKind::Database,
            "Failed to commit seed transaction",
            e,
        ))
    })
}

/// Read every data row of a CSV file (header skipped) through `map`.
///
/// Stops at the first row that fails to map; nothing has been written at
/// that point.
fn read_rows<T>(
    path: &Path,
    map: impl Fn(&StringRecord) -> Result<T, RowError>,
) -> Result<Vec<T>, SeedError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SeedError::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            SeedError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| SeedError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row = map(&record).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}
