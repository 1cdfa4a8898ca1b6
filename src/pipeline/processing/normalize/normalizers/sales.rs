use crate::common::Domain;
use crate::domain::Sales;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `Vendas`: row 1 holds the yearly totals (targets and achieved, columns
/// A-D); the rows after it carry monthly sales in column E.
impl TableRecord for Sales {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::Sales,
        header_rows: 1,
        fixed_rows: 1,
        detail_rows: true,
        required_cells: &[4],
    };

    fn absorb_fixed(&mut self, _index: usize, row: Row<'_>) {
        self.financial_target = row.number(0);
        self.production_target = row.number(1);
        self.financial_achieved = row.number(2);
        self.production_achieved = row.number(3);
    }

    fn absorb_detail(&mut self, row: Row<'_>) {
        self.monthly_data.push(row.number(4));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RawTable;
    use crate::pipeline::processing::normalize::normalize;

    #[test]
    fn test_totals_then_monthly_detail() {
        let table = RawTable::from_rows(vec![
            vec!["Meta Fin", "Meta Prod", "Realizado Fin", "Realizado Prod", "Mensal"],
            vec!["3500000", "12000", "3120000", "10850"],
            vec!["", "", "", "", "520000"],
            vec!["", "", "", "", "480000"],
        ]);
        let sales: Sales = normalize(Some(&table));
        assert_eq!(sales.financial_target, 3500000.0);
        assert_eq!(sales.production_target, 12000.0);
        assert_eq!(sales.financial_achieved, 3120000.0);
        assert_eq!(sales.production_achieved, 10850.0);
        assert_eq!(sales.monthly_data, vec![520000.0, 480000.0]);
    }

    #[test]
    fn test_totals_row_monthly_cell_is_not_detail() {
        let table = RawTable::from_rows(vec![
            vec!["h"],
            vec!["100", "10", "50", "5", "777"],
            vec!["", "", "", ""],
        ]);
        let sales: Sales = normalize(Some(&table));
        assert_eq!(sales.financial_target, 100.0);
        assert!(sales.monthly_data.is_empty());
    }
}
