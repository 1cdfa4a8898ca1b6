//! Refresh metrics.
//!
//! Names follow `quarry_{phase}_{name}` with a `_total` suffix for counters.
//! Without an installed recorder every call is a no-op, so library code can
//! record unconditionally.

use std::net::SocketAddr;
use std::sync::Once;
use tracing::{info, warn};

use crate::common::constants::ENV_METRICS_ADDR;

macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("quarry_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("quarry_", $phase, "_", $name)
    };
}

static INIT: Once = Once::new();

/// Install the Prometheus exporter when `QUARRY_METRICS_ADDR` is set. Idempotent.
pub fn init_metrics() {
    INIT.call_once(|| {
        let Ok(addr_str) = std::env::var(ENV_METRICS_ADDR) else {
            return;
        };
        let addr: SocketAddr = match addr_str.parse() {
            Ok(addr) => addr,
            Err(e) => {
                warn!("Invalid {} '{}': {}", ENV_METRICS_ADDR, addr_str, e);
                return;
            }
        };
        match metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
        {
            Ok(()) => info!("Prometheus exporter listening on http://{}/metrics", addr),
            Err(e) => warn!("Failed to install Prometheus exporter: {}", e),
        }
    });
}

pub struct RefreshMetrics;

impl RefreshMetrics {
    pub fn record_live(duration_secs: f64) {
        ::metrics::counter!(phase_metric!(counter, "refresh", "runs"), "origin" => "live").increment(1);
        ::metrics::histogram!(phase_metric!(histogram, "refresh", "fetch_duration_seconds"))
            .record(duration_secs);
    }

    /// `reason` is `unconfigured` or `fetch_failed`.
    pub fn record_fallback(reason: &'static str) {
        ::metrics::counter!(phase_metric!(counter, "refresh", "runs"), "origin" => "sample").increment(1);
        ::metrics::counter!(phase_metric!(counter, "refresh", "fallbacks"), "reason" => reason)
            .increment(1);
    }
}

pub struct ExportMetrics;

impl ExportMetrics {
    pub fn record_written(bytes: usize) {
        ::metrics::counter!(phase_metric!(counter, "export", "reports")).increment(1);
        ::metrics::histogram!(phase_metric!(histogram, "export", "report_bytes")).record(bytes as f64);
    }
}
