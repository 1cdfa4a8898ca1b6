//! pt-BR formatting and the text summary printed by the CLI.

use crate::common::constants::{MONTHS_PER_YEAR, TARGET_WINDOW};
use crate::pipeline::{DataOrigin, FallbackReason, Snapshot};

/// Annual financial target spread evenly over the months shown on the
/// sales-vs-target chart.
pub fn monthly_target_series(financial_target: f64) -> Vec<f64> {
    vec![financial_target / MONTHS_PER_YEAR; TARGET_WINDOW]
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Returns (is_negative, unsigned body) with `.` grouping and `,` decimals.
fn format_decimal(value: f64, min_frac: usize, max_frac: usize) -> (bool, String) {
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac.chars().all(|c| c == '0');
    let mut body = group_thousands(int_part);
    if !frac.is_empty() {
        body.push(',');
        body.push_str(&frac);
    }
    (value < 0.0 && !is_zero, body)
}

/// `1250` -> `1.250`, `45.8` -> `45,8` (at most three decimals).
pub fn format_number(value: f64) -> String {
    let (negative, body) = format_decimal(value, 0, 3);
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// `1250` -> `R$ 1.250,00`, `-85000` -> `-R$ 85.000,00`.
pub fn format_brl(value: f64) -> String {
    let (negative, body) = format_decimal(value, 2, 2);
    if negative {
        format!("-R$ {body}")
    } else {
        format!("R$ {body}")
    }
}

pub fn format_tons(value: f64) -> String {
    format!("{} ton", format_number(value))
}

/// Raw number followed by `%` (`15.5` -> `15.5%`).
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

pub fn origin_label(origin: &DataOrigin) -> String {
    match origin {
        DataOrigin::Live { source } => format!("live data from {source}"),
        DataOrigin::Sample {
            reason: FallbackReason::Unconfigured,
        } => "sample data (no spreadsheet configured)".to_string(),
        DataOrigin::Sample {
            reason: FallbackReason::FetchFailed { error },
        } => format!("sample data (spreadsheet unavailable: {error})"),
    }
}

/// Lines describing a snapshot, one dashboard panel per line.
pub fn summary_lines(snapshot: &Snapshot) -> Vec<String> {
    let data = &snapshot.data;
    let mut lines = vec![
        format!(
            "Snapshot {} at {}: {}",
            snapshot.id,
            snapshot.taken_at.format("%Y-%m-%d %H:%M:%S UTC"),
            origin_label(&snapshot.origin)
        ),
        format!(
            "Stock: Brita 0 {} | Brita 1 {} | Pedrisco {}",
            format_tons(data.stock.brita0),
            format_tons(data.stock.brita1),
            format_tons(data.stock.pedrisco)
        ),
        format!("Cost per ton: {}", format_brl(data.costs.cost_per_ton)),
        format!(
            "ROI: {} | Active loans: {} | Expected return: {}",
            format_percent(data.roi.current),
            format_brl(data.roi.active_loans),
            format_brl(data.roi.expected_return)
        ),
    ];

    if data.equipment.is_empty() {
        lines.push("Equipment depreciation: none".to_string());
    } else {
        lines.push(format!(
            "Equipment depreciation: {}",
            format_brl(data.equipment.total())
        ));
        for (name, amount) in &data.equipment.0 {
            lines.push(format!("  {name}: {}", format_brl(*amount)));
        }
    }

    lines.push(format!(
        "Maintenance impact: {}",
        format_brl(data.maintenance.impact)
    ));
    lines.push(format!(
        "Sales: {} of {} ({}%) | Production: {} of {}",
        format_brl(data.sales.financial_achieved),
        format_brl(data.sales.financial_target),
        format_number(data.sales.financial_progress() * 100.0),
        format_tons(data.sales.production_achieved),
        format_tons(data.sales.production_target)
    ));
    if let Some(monthly) = monthly_target_series(data.sales.financial_target).first() {
        lines.push(format!("Monthly sales target: {}", format_brl(*monthly)));
    }
    lines
}
