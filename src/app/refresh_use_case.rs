use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{info, instrument, warn};

use crate::app::ports::SheetSource;
use crate::config::{Config, SheetTabs};
use crate::error::Result;
use crate::infra::GoogleSheetsSource;
use crate::metrics::RefreshMetrics;
use crate::pipeline::{
    fetch_all_tables, normalize_all, DataOrigin, FallbackReason, Snapshot, SnapshotStore,
};
use crate::sample::sample_dashboard;

/// One dashboard refresh: fetch every table, normalize, publish.
///
/// Any fetch failure makes the whole refresh fall back to the sample
/// dataset. With no source configured the sample is used directly.
pub struct RefreshUseCase {
    source: Option<Arc<dyn SheetSource>>,
    tabs: SheetTabs,
    store: Arc<SnapshotStore>,
}

impl RefreshUseCase {
    pub fn new(
        source: Option<Arc<dyn SheetSource>>,
        tabs: SheetTabs,
        store: Arc<SnapshotStore>,
    ) -> Self {
        Self { source, tabs, store }
    }

    /// Wire a Google Sheets source when credentials are configured.
    pub fn from_config(config: &Config, store: Arc<SnapshotStore>) -> Result<Self> {
        let source: Option<Arc<dyn SheetSource>> = match config.sheets.credentials() {
            Some(creds) => Some(Arc::new(GoogleSheetsSource::new(&config.sheets, creds)?)),
            None => None,
        };
        Ok(Self::new(source, config.sheets.tabs.clone(), store))
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Arc<Snapshot> {
        let (origin, data) = match &self.source {
            None => {
                info!("No spreadsheet configured, using sample data");
                RefreshMetrics::record_fallback("unconfigured");
                (
                    DataOrigin::Sample {
                        reason: FallbackReason::Unconfigured,
                    },
                    sample_dashboard(),
                )
            }
            Some(source) => {
                let t0 = Instant::now();
                match fetch_all_tables(source.as_ref(), &self.tabs).await {
                    Ok(tables) => {
                        RefreshMetrics::record_live(t0.elapsed().as_secs_f64());
                        (
                            DataOrigin::Live {
                                source: source.name().to_string(),
                            },
                            normalize_all(&tables),
                        )
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to load from spreadsheet, using sample data");
                        RefreshMetrics::record_fallback("fetch_failed");
                        (
                            DataOrigin::Sample {
                                reason: FallbackReason::FetchFailed {
                                    error: e.to_string(),
                                },
                            },
                            sample_dashboard(),
                        )
                    }
                }
            }
        };

        let snapshot = self.store.publish(Snapshot::new(origin, data));
        info!(snapshot_id = %snapshot.id, live = snapshot.origin.is_live(), "Dashboard refreshed");
        snapshot
    }

    /// Refresh now and then every `interval` until `shutdown` resolves.
    /// Returns the number of refreshes performed.
    pub async fn watch<S, F>(&self, interval: Duration, shutdown: S, mut on_refresh: F) -> usize
    where
        S: Future<Output = ()>,
        F: FnMut(&Snapshot),
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut runs = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!(runs, "Stopping refresh loop");
                    return runs;
                }
                _ = ticker.tick() => {
                    let snapshot = self.refresh().await;
                    runs += 1;
                    on_refresh(&snapshot);
                }
            }
        }
    }
}
