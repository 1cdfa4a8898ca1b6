//! Downloadable dashboard report.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::common::constants::REPORT_FILE_PREFIX;
use crate::domain::{DashboardData, Equipment, Sales, Stock};
use crate::error::Result;
use crate::metrics::ExportMetrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub cost_per_ton: f64,
    /// Current ROI, percent.
    pub roi: f64,
    pub active_loans: f64,
    pub expected_return: f64,
}

/// Point-in-time export of the headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// ISO-8601 UTC with milliseconds.
    pub timestamp: String,
    pub stock: Stock,
    pub financial: FinancialSummary,
    pub equipment: Equipment,
    pub sales: Sales,
}

impl Report {
    pub fn build(data: &DashboardData, generated_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            stock: data.stock.clone(),
            financial: FinancialSummary {
                cost_per_ton: data.costs.cost_per_ton,
                roi: data.roi.current,
                active_loans: data.roi.active_loans,
                expected_return: data.roi.expected_return,
            },
            equipment: data.equipment.clone(),
            sales: data.sales.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `relatorio-pedreira-YYYY-MM-DD.json`
    pub fn file_name(generated_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}.json",
            REPORT_FILE_PREFIX,
            generated_at.format("%Y-%m-%d")
        )
    }
}

/// Write a report for `data` into `dir`, creating it if needed. An existing
/// report for the same day is overwritten.
pub fn write_report(data: &DashboardData, dir: &Path, generated_at: DateTime<Utc>) -> Result<PathBuf> {
    let report = Report::build(data, generated_at);
    let json = report.to_json_pretty()?;

    fs::create_dir_all(dir)?;
    let path = dir.join(Report::file_name(generated_at));
    fs::write(&path, &json)?;

    ExportMetrics::record_written(json.len());
    info!(path = %path.display(), bytes = json.len(), "Report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_dashboard;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_report_shape() {
        let report = Report::build(&sample_dashboard(), at());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["timestamp"], "2024-06-30T14:05:09.000Z");
        assert_eq!(value["stock"]["brita0"], 1250.0);
        assert_eq!(value["financial"]["costPerTon"], 45.8);
        assert_eq!(value["financial"]["roi"], 15.5);
        assert_eq!(value["financial"]["activeLoans"], 850000.0);
        assert_eq!(value["equipment"]["loaders"], 125000.0);
        assert_eq!(value["sales"]["financialTarget"], 3500000.0);
        assert!(value.get("maintenance").is_none());
        assert!(value.get("cashFlow").is_none());
    }

    #[test]
    fn test_file_name_carries_date() {
        assert_eq!(Report::file_name(at()), "relatorio-pedreira-2024-06-30.json");
    }
}
