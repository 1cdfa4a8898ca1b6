//! Built-in sample dataset shown when the spreadsheet cannot be used.

use std::collections::BTreeMap;

use crate::domain::{CashFlow, Costs, DashboardData, Equipment, Maintenance, Roi, Sales, Stock};

/// A plausible six-month quarry dataset (January to June).
pub fn sample_dashboard() -> DashboardData {
    DashboardData {
        stock: Stock {
            brita0: 1250.0,
            brita1: 980.0,
            pedrisco: 750.0,
        },
        costs: Costs {
            cost_per_ton: 45.80,
            monthly_data: vec![42.5, 44.2, 43.8, 45.1, 45.8, 46.2],
        },
        roi: Roi {
            current: 15.5,
            active_loans: 850_000.0,
            expected_return: 1_200_000.0,
        },
        cash_flow: CashFlow {
            labels: ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun"]
                .into_iter()
                .map(String::from)
                .collect(),
            income: vec![450_000.0, 520_000.0, 480_000.0, 560_000.0, 590_000.0, 620_000.0],
            expenses: vec![320_000.0, 380_000.0, 350_000.0, 410_000.0, 420_000.0, 450_000.0],
        },
        equipment: Equipment(BTreeMap::from([
            ("loaders".to_string(), 125_000.0),
            ("trucks".to_string(), 89_000.0),
            ("excavators".to_string(), 156_000.0),
            ("primaryCrusher".to_string(), 45_000.0),
            ("secondaryCrusher".to_string(), 38_000.0),
        ])),
        maintenance: Maintenance {
            monthly: vec![25_000.0, 32_000.0, 28_000.0, 35_000.0, 42_000.0, 38_000.0],
            impact: -85_000.0,
        },
        sales: Sales {
            financial_target: 3_500_000.0,
            production_target: 12_000.0,
            financial_achieved: 3_120_000.0,
            production_achieved: 10_850.0,
            monthly_data: vec![520_000.0, 480_000.0, 560_000.0, 590_000.0, 620_000.0, 650_000.0],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_series_line_up() {
        let data = sample_dashboard();
        assert_eq!(data.cash_flow.labels.len(), data.cash_flow.income.len());
        assert_eq!(data.cash_flow.labels.len(), data.cash_flow.expenses.len());
        assert_eq!(data.costs.monthly_data.len(), 6);
        assert_eq!(data.equipment.len(), 5);
        assert!(data.maintenance.impact <= 0.0);
    }
}
