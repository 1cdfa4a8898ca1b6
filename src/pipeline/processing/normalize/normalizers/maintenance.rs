use crate::common::Domain;
use crate::domain::Maintenance;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `Manutencao`: month label and maintenance spend.
impl TableRecord for Maintenance {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::Maintenance,
        header_rows: 1,
        fixed_rows: 0,
        detail_rows: true,
        required_cells: &[1],
    };

    fn absorb_detail(&mut self, row: Row<'_>) {
        self.monthly.push(row.number(1));
    }

    fn finish(&mut self) {
        self.impact = 0.0 - self.monthly.iter().sum::<f64>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RawTable;
    use crate::pipeline::processing::normalize::normalize;

    #[test]
    fn test_impact_is_negated_sum() {
        let table = RawTable::from_rows(vec![
            vec!["Mes", "Valor"],
            vec!["Jan", "25000"],
            vec!["Fev", "32000"],
        ]);
        let maintenance: Maintenance = normalize(Some(&table));
        assert_eq!(maintenance.monthly, vec![25000.0, 32000.0]);
        assert_eq!(maintenance.impact, -57000.0);
    }

    #[test]
    fn test_negative_month_offsets_spend() {
        let table = RawTable::from_rows(vec![
            vec!["Mes", "Valor"],
            vec!["Jan", "-1000"],
            vec!["Fev", "500"],
        ]);
        let maintenance: Maintenance = normalize(Some(&table));
        assert_eq!(maintenance.monthly, vec![-1000.0, 500.0]);
        assert_eq!(maintenance.impact, 500.0);
    }

    #[test]
    fn test_no_months_means_zero_impact() {
        let table = RawTable::from_rows(vec![vec!["Mes", "Valor"], vec!["Jan", ""]]);
        let maintenance: Maintenance = normalize(Some(&table));
        assert!(maintenance.monthly.is_empty());
        assert_eq!(maintenance.impact, 0.0);
        assert!(maintenance.impact.is_sign_positive());
    }
}
