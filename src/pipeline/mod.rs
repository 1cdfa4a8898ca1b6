// Refresh pipeline: ingestion, processing, and snapshot storage

pub mod ingestion;
pub mod processing;
pub mod storage;

pub use ingestion::fetch_all_tables;
pub use processing::normalize::normalize_all;
pub use storage::{DataOrigin, FallbackReason, Snapshot, SnapshotStore};
