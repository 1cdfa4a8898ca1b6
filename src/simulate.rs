//! Live-looking jitter for demo displays.
//!
//! Applied to a copy of a snapshot's data for presentation only; published
//! snapshots and exports never carry jittered values.

use rand::Rng;

use crate::domain::DashboardData;

/// Largest relative move applied per tick.
pub const DEFAULT_JITTER: f64 = 0.02;

/// Copy of `data` with ROI, stock levels and cost per ton each moved by a
/// random fraction in `[-max_fraction, max_fraction]`, clamped at zero.
pub fn jitter<R: Rng>(data: &DashboardData, rng: &mut R, max_fraction: f64) -> DashboardData {
    let mut out = data.clone();
    if !(max_fraction > 0.0 && max_fraction.is_finite()) {
        return out;
    }

    let mut nudge = |value: f64| -> f64 {
        let delta = rng.gen_range(-max_fraction..=max_fraction);
        (value * (1.0 + delta)).max(0.0)
    };

    out.roi.current = nudge(out.roi.current);
    out.stock.brita0 = nudge(out.stock.brita0);
    out.stock.brita1 = nudge(out.stock.brita1);
    out.stock.pedrisco = nudge(out.stock.pedrisco);
    out.costs.cost_per_ton = nudge(out.costs.cost_per_ton);
    out
}
