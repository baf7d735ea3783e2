//! Event entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single Paralympic Games (one edition, summer or winter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Surrogate key assigned by the database.
    pub id: i64,
    /// `summer` or `winter`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Year the games were held.
    pub year: i64,
    /// Host country.
    pub country: String,
    /// Host city.
    pub host: String,
    /// Host NOC code; references [`Region::noc`](crate::region::Region).
    #[serde(rename = "NOC")]
    pub noc: String,
    /// Start date as given in the source data.
    #[sqlx(rename = "start_date")]
    pub start: String,
    /// End date as given in the source data.
    #[sqlx(rename = "end_date")]
    pub end: String,
    /// Duration in days.
    pub duration: Option<i64>,
    /// Which disability categories were included.
    pub disabilities_included: String,
    /// Number of participating countries.
    pub countries: Option<i64>,
    /// Number of medal events.
    pub events: Option<i64>,
    /// Number of sports.
    pub sports: Option<i64>,
    /// Male participants.
    pub participants_m: Option<i64>,
    /// Female participants.
    pub participants_f: Option<i64>,
    /// Total participants.
    pub participants: Option<i64>,
    /// Free-text highlights.
    pub highlights: String,
}

/// Data required to insert a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// `summer` or `winter`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Year the games were held.
    pub year: i64,
    /// Host country.
    pub country: String,
    /// Host city.
    pub host: String,
    /// Host NOC code.
    #[serde(rename = "NOC")]
    pub noc: String,
    /// Start date.
    #[serde(default)]
    pub start: String,
    /// End date.
    #[serde(default)]
    pub end: String,
    /// Duration in days.
    #[serde(default)]
    pub duration: Option<i64>,
    /// Which disability categories were included.
    #[serde(default)]
    pub disabilities_included: String,
    /// Number of participating countries.
    #[serde(default)]
    pub countries: Option<i64>,
    /// Number of medal events.
    #[serde(default)]
    pub events: Option<i64>,
    /// Number of sports.
    #[serde(default)]
    pub sports: Option<i64>,
    /// Male participants.
    #[serde(default)]
    pub participants_m: Option<i64>,
    /// Female participants.
    #[serde(default)]
    pub participants_f: Option<i64>,
    /// Total participants.
    #[serde(default)]
    pub participants: Option<i64>,
    /// Free-text highlights.
    #[serde(default)]
    pub highlights: String,
}
