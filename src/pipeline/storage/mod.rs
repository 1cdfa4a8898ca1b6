// Published dashboard snapshots

pub mod snapshot;

pub use snapshot::{DataOrigin, FallbackReason, Snapshot, SnapshotStore};
