use crate::common::Domain;
use crate::domain::Costs;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `Custos`: month label in column A, cost per ton in column B.
impl TableRecord for Costs {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::Costs,
        header_rows: 1,
        fixed_rows: 0,
        detail_rows: true,
        required_cells: &[1],
    };

    fn absorb_detail(&mut self, row: Row<'_>) {
        self.monthly_data.push(row.number(1));
    }

    fn finish(&mut self) {
        self.cost_per_ton = self.monthly_data.last().copied().unwrap_or(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RawTable;
    use crate::pipeline::processing::normalize::normalize;

    #[test]
    fn test_cost_per_ton_is_last_month() {
        let table = RawTable::from_rows(vec![
            vec!["Mes", "Custo"],
            vec!["Jan", "42.5"],
            vec!["Fev", "44.2"],
        ]);
        let costs: Costs = normalize(Some(&table));
        assert_eq!(costs.monthly_data, vec![42.5, 44.2]);
        assert_eq!(costs.cost_per_ton, 44.2);
    }

    #[test]
    fn test_rows_without_cost_are_skipped() {
        let table = RawTable::from_rows(vec![
            vec!["Mes", "Custo"],
            vec!["Jan", ""],
            vec!["Fev"],
            vec!["Mar", "n/a"],
        ]);
        let costs: Costs = normalize(Some(&table));
        // "n/a" is present, so it counts as a month worth 0
        assert_eq!(costs.monthly_data, vec![0.0]);
        assert_eq!(costs.cost_per_ton, 0.0);
    }
}
