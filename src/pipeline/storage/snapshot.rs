use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::domain::DashboardData;

/// Why the sample dataset is being shown instead of spreadsheet data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No spreadsheet id or API key configured.
    Unconfigured,
    /// A fetch was attempted and at least one range failed.
    FetchFailed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Live { source: String },
    Sample { reason: FallbackReason },
}

impl DataOrigin {
    pub fn is_live(&self) -> bool {
        matches!(self, DataOrigin::Live { .. })
    }
}

/// An immutable view of the dashboard as of one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub id: Uuid,
    pub taken_at: DateTime<Utc>,
    pub origin: DataOrigin,
    pub data: DashboardData,
}

impl Snapshot {
    pub fn new(origin: DataOrigin, data: DashboardData) -> Self {
        Self {
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            origin,
            data,
        }
    }
}

/// Holds the latest snapshot. Publishing replaces it wholesale; readers that
/// still hold the previous `Arc` keep seeing the old data until they drop it.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
        debug!(snapshot_id = %snapshot.id, "Publishing snapshot");
        *slot = Some(Arc::clone(&snapshot));
        snapshot
    }

    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_dashboard;

    #[test]
    fn test_store_starts_empty() {
        assert!(SnapshotStore::new().current().is_none());
    }

    #[test]
    fn test_publish_replaces_but_old_readers_keep_their_copy() {
        let store = SnapshotStore::new();
        let first = store.publish(Snapshot::new(
            DataOrigin::Sample { reason: FallbackReason::Unconfigured },
            sample_dashboard(),
        ));
        let held = store.current().unwrap();

        let second = store.publish(Snapshot::new(
            DataOrigin::Live { source: "in_memory".into() },
            DashboardData::default(),
        ));

        assert_eq!(store.current().unwrap().id, second.id);
        assert_eq!(held.id, first.id);
        assert_eq!(held.data.stock.brita0, 1250.0);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_origin_serializes_with_reason() {
        let origin = DataOrigin::Sample {
            reason: FallbackReason::FetchFailed { error: "timeout".into() },
        };
        let value = serde_json::to_value(&origin).unwrap();
        assert_eq!(value["sample"]["reason"]["fetch_failed"]["error"], "timeout");
        assert!(!origin.is_live());
    }
}
