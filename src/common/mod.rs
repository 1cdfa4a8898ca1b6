// Shared constants and value types used across the crate

pub mod constants;
pub mod types;

pub use types::{Domain, RawTable, RawTables};
