//! Normalized dashboard records.
//!
//! Every record is fully populated: numbers default to 0 and sequences to
//! empty, so consumers never see a partial shape. Field names serialize in
//! the camelCase form the dashboard front end reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate stock levels in tons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub brita0: f64,
    pub brita1: f64,
    pub pedrisco: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    /// Latest monthly production cost per ton (last entry of `monthly_data`).
    pub cost_per_ton: f64,
    pub monthly_data: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roi {
    /// Percent.
    pub current: f64,
    pub active_loans: f64,
    pub expected_return: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expenses: Vec<f64>,
}

/// Depreciation per piece of equipment, keyed by the normalized label.
///
/// The key set is open: any label found in the sheet becomes an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Equipment(pub BTreeMap<String, f64>);

impl Equipment {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, amount: f64) {
        self.0.insert(key.into(), amount);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    pub monthly: Vec<f64>,
    /// Cost contribution, always zero or negative.
    pub impact: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sales {
    pub financial_target: f64,
    pub production_target: f64,
    pub financial_achieved: f64,
    pub production_achieved: f64,
    pub monthly_data: Vec<f64>,
}

impl Sales {
    /// Achieved share of the financial target, 0 when no target is set.
    pub fn financial_progress(&self) -> f64 {
        if self.financial_target > 0.0 {
            self.financial_achieved / self.financial_target
        } else {
            0.0
        }
    }

    pub fn production_progress(&self) -> f64 {
        if self.production_target > 0.0 {
            self.production_achieved / self.production_target
        } else {
            0.0
        }
    }
}

/// Everything the dashboard renders, one record per domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stock: Stock,
    pub costs: Costs,
    pub roi: Roi,
    pub cash_flow: CashFlow,
    pub equipment: Equipment,
    pub maintenance: Maintenance,
    pub sales: Sales,
}
