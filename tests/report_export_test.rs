use chrono::{TimeZone, Utc};
use serde_json::Value;
use tempfile::tempdir;

use quarry_dashboard::report::{write_report, Report};
use quarry_dashboard::sample::sample_dashboard;

#[test]
fn test_export_writes_dated_pretty_json() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("reports");
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap();

    let path = write_report(&sample_dashboard(), &out, at)?;

    assert_eq!(path, out.join("relatorio-pedreira-2025-01-15.json"));
    let text = std::fs::read_to_string(&path)?;
    assert!(text.contains("\n  \"stock\""));

    let value: Value = serde_json::from_str(&text)?;
    for key in ["timestamp", "stock", "financial", "equipment", "sales"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["timestamp"], "2025-01-15T08:30:00.000Z");

    let report: Report = serde_json::from_str(&text)?;
    assert_eq!(report, Report::build(&sample_dashboard(), at));
    Ok(())
}
