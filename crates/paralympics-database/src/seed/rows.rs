//! Positional CSV row mapping.
//!
//! Both source files are mapped by column index, not by header name. A
//! reordered file is loaded into the wrong fields without complaint, so the
//! column constants below are the only contract with the data files.

use csv::StringRecord;
use thiserror::Error;

use paralympics_entity::event::NewEvent;
use paralympics_entity::region::Region;

/// `NOC, region, notes`
pub const REGION_COLUMNS: usize = 3;

/// `type, year, country, host, NOC, start, end, duration,
/// disabilities_included, countries, events, sports, participants_m,
/// participants_f, participants, highlights`
pub const EVENT_COLUMNS: usize = 16;

/// A single row that cannot be mapped to an entity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    /// The row does not have the fixed number of columns.
    #[error("expected {expected} columns, found {found}")]
    ColumnCount {
        /// Columns the mapping requires.
        expected: usize,
        /// Columns present in the row.
        found: usize,
    },
    /// A numeric column holds something other than an integer.
    #[error("column {index} ({name}) is not an integer: {value:?}")]
    InvalidNumber {
        /// 0-based column index.
        index: usize,
        /// Field the column maps to.
        name: &'static str,
        /// Raw cell contents.
        value: String,
    },
}

/// Map a region row.
pub fn region_from_record(record: &StringRecord) -> Result<Region, RowError> {
    check_width(record, REGION_COLUMNS)?;

    Ok(Region {
        noc: record[0].to_string(),
        region: record[1].to_string(),
        notes: record[2].to_string(),
    })
}

/// Map an event row. Blank numeric cells become `None`; `year` is required.
pub fn event_from_record(record: &StringRecord) -> Result<NewEvent, RowError> {
    check_width(record, EVENT_COLUMNS)?;

    Ok(NewEvent {
        event_type: record[0].to_string(),
        year: required_int(record, 1, "year")?,
        country: record[2].to_string(),
        host: record[3].to_string(),
        noc: record[4].to_string(),
        start: record[5].to_string(),
        end: record[6].to_string(),
        duration: optional_int(record, 7, "duration")?,
        disabilities_included: record[8].to_string(),
        countries: optional_int(record, 9, "countries")?,
        events: optional_int(record, 10, "events")?,
        sports: optional_int(record, 11, "sports")?,
        participants_m: optional_int(record, 12, "participants_m")?,
        participants_f: optional_int(record, 13, "participants_f")?,
        participants: optional_int(record, 14, "participants")?,
        highlights: record[15].to_string(),
    })
}

fn check_width(record: &StringRecord, expected: usize) -> Result<(), RowError> {
    if record.len() != expected {
        return Err(RowError::ColumnCount {
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

fn optional_int(
    record: &StringRecord,
    index: usize,
    name: &'static str,
) -> Result<Option<i64>, RowError> {
    let raw = record[index].trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| RowError::InvalidNumber {
        index,
        name,
        value: record[index].to_string(),
    })
}

fn required_int(record: &StringRecord, index: usize, name: &'static str) -> Result<i64, RowError> {
    optional_int(record, index, name)?.ok_or_else(|| RowError::InvalidNumber {
        index,
        name,
        value: String::new(),
    })
}
