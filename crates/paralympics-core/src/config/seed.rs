//! Seed data configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the CSV files loaded into an empty database at startup.
///
/// Seeding always runs; there is no switch to start without data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Region reference data: `NOC,region,notes`.
    #[serde(default = "default_regions_csv")]
    pub regions_csv: PathBuf,
    /// Games records, 16 positional columns.
    #[serde(default = "default_events_csv")]
    pub events_csv: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            regions_csv: default_regions_csv(),
            events_csv: default_events_csv(),
        }
    }
}

fn default_regions_csv() -> PathBuf {
    PathBuf::from("data/noc_regions.csv")
}

fn default_events_csv() -> PathBuf {
    PathBuf::from("data/paralympic_events.csv")
}
