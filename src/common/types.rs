use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::common::constants::*;

/// One category of business data kept in its own sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Stock,
    Costs,
    Roi,
    CashFlow,
    Equipment,
    Maintenance,
    Sales,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Stock,
        Domain::Costs,
        Domain::Roi,
        Domain::CashFlow,
        Domain::Equipment,
        Domain::Maintenance,
        Domain::Sales,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Stock => "stock",
            Domain::Costs => "costs",
            Domain::Roi => "roi",
            Domain::CashFlow => "cash_flow",
            Domain::Equipment => "equipment",
            Domain::Maintenance => "maintenance",
            Domain::Sales => "sales",
        }
    }

    pub fn default_sheet(&self) -> &'static str {
        match self {
            Domain::Stock => STOCK_SHEET,
            Domain::Costs => COSTS_SHEET,
            Domain::Roi => ROI_SHEET,
            Domain::CashFlow => CASH_FLOW_SHEET,
            Domain::Equipment => EQUIPMENT_SHEET,
            Domain::Maintenance => MAINTENANCE_SHEET,
            Domain::Sales => SALES_SHEET,
        }
    }

    pub fn columns(&self) -> &'static str {
        match self {
            Domain::Stock => STOCK_COLUMNS,
            Domain::Costs => COSTS_COLUMNS,
            Domain::Roi => ROI_COLUMNS,
            Domain::CashFlow => CASH_FLOW_COLUMNS,
            Domain::Equipment => EQUIPMENT_COLUMNS,
            Domain::Maintenance => MAINTENANCE_COLUMNS,
            Domain::Sales => SALES_COLUMNS,
        }
    }

    /// A1-notation range for this domain on the given sheet, e.g. `Estoque!A:C`.
    pub fn range_on(&self, sheet: &str) -> String {
        format!("{}!{}", sheet, self.columns())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unprocessed rows as returned by the spreadsheet source.
///
/// Row 0 is the header. Cells missing at the end of a row are simply absent
/// (rows may be ragged); empty cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a table from anything string-like; handy for fixtures.
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Convert the JSON cell grid of a values response into strings.
    /// Numbers and booleans are rendered as text; null becomes an empty cell.
    pub fn from_json_values(values: Vec<Vec<Value>>) -> Self {
        let rows = values
            .into_iter()
            .map(|row| row.into_iter().map(json_cell_to_string).collect())
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when there is at least one row beyond the first `header_rows`.
    pub fn has_rows_after(&self, header_rows: usize) -> bool {
        self.rows.len() > header_rows
    }
}

fn json_cell_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => if b { "TRUE" } else { "FALSE" }.to_string(),
        other => other.to_string(),
    }
}

/// One raw table per domain, as gathered by a refresh.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    tables: HashMap<Domain, RawTable>,
}

impl RawTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: Domain, table: RawTable) {
        self.tables.insert(domain, table);
    }

    pub fn with(mut self, domain: Domain, table: RawTable) -> Self {
        self.insert(domain, table);
        self
    }

    pub fn get(&self, domain: Domain) -> Option<&RawTable> {
        self.tables.get(&domain)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
