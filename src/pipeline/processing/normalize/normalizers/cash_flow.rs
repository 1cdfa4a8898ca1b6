use crate::common::Domain;
use crate::domain::CashFlow;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `FluxoCaixa`: period label, income, expenses. Unlabelled rows are skipped
/// so the three sequences always stay the same length.
impl TableRecord for CashFlow {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::CashFlow,
        header_rows: 1,
        fixed_rows: 0,
        detail_rows: true,
        required_cells: &[0],
    };

    fn absorb_detail(&mut self, row: Row<'_>) {
        self.labels.push(row.text(0).unwrap_or_default().to_string());
        self.income.push(row.number(1));
        self.expenses.push(row.number(2));
    }
}
