//! Region reference data.

pub mod model;

pub use model::Region;
