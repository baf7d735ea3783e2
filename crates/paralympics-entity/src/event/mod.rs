//! Paralympic Games event records.

pub mod model;

pub use model::{Event, NewEvent};
