//! Region entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A country or territory identified by its National Olympic Committee code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Region {
    /// NOC code, e.g. `GBR`. Primary key.
    #[serde(rename = "NOC")]
    pub noc: String,
    /// Region name.
    pub region: String,
    /// Free-text notes, often empty.
    #[serde(default)]
    pub notes: String,
}
