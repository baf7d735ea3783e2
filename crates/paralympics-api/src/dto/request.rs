//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use paralympics_entity::event::NewEvent;
use paralympics_entity::region::Region;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email, unique ignoring case.
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    /// Plain text password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// New region body. Field names follow the CSV header.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRegionRequest {
    /// Three letter National Olympic Committee code.
    #[serde(rename = "NOC")]
    #[validate(length(equal = 3, message = "NOC must be a three letter code"))]
    pub noc: String,
    /// Region name.
    #[validate(length(min = 1, message = "Region name is required"))]
    pub region: String,
    /// Free text notes.
    #[serde(default)]
    pub notes: String,
}

impl From<CreateRegionRequest> for Region {
    fn from(req: CreateRegionRequest) -> Self {
        Self {
            noc: req.noc,
            region: req.region,
            notes: req.notes,
        }
    }
}

/// New event body. Field names follow the CSV header.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// `summer` or `winter`.
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_event_type"))]
    pub event_type: String,
    /// Year the games were held.
    #[validate(range(min = 1900, max = 2100, message = "Year is out of range"))]
    pub year: i64,
    /// Host country.
    #[serde(default)]
    pub country: String,
    /// Host city.
    #[validate(length(min = 1, message = "Host is required"))]
    pub host: String,
    /// Host NOC code.
    #[serde(rename = "NOC")]
    #[validate(length(equal = 3, message = "NOC must be a three letter code"))]
    pub noc: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub disabilities_included: String,
    #[serde(default)]
    pub countries: Option<i64>,
    #[serde(default)]
    pub events: Option<i64>,
    #[serde(default)]
    pub sports: Option<i64>,
    #[serde(default)]
    pub participants_m: Option<i64>,
    #[serde(default)]
    pub participants_f: Option<i64>,
    #[serde(default)]
    pub participants: Option<i64>,
    #[serde(default)]
    pub highlights: String,
}

fn validate_event_type(value: &str) -> Result<(), ValidationError> {
    match value {
        "summer" | "winter" => Ok(()),
        _ => Err(ValidationError::new("event_type")
            .with_message("Event type must be summer or winter".into())),
    }
}

impl From<CreateEventRequest> for NewEvent {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            event_type: req.event_type,
            year: req.year,
            country: req.country,
            host: req.host,
            noc: req.noc,
            start: req.start,
            end: req.end,
            duration: req.duration,
            disabilities_included: req.disabilities_included,
            countries: req.countries,
            events: req.events,
            sports: req.sports,
            participants_m: req.participants_m,
            participants_f: req.participants_f,
            participants: req.participants,
            highlights: req.highlights,
        }
    }
}
