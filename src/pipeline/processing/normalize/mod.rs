//! Raw sheet tables -> normalized dashboard records.
//!
//! Each domain is described by a [`TableLayout`] and a small row accumulator
//! ([`TableRecord`]); [`normalize`] drives them all the same way. Nothing in
//! here fails: malformed cells become 0 and missing tables become the
//! default record.

pub mod coerce;
pub mod layout;
pub mod normalizers;
pub mod registry;

pub use layout::{normalize, Row, TableLayout, TableRecord};
pub use registry::{layout_for, normalize_all};
