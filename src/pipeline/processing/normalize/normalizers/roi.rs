use crate::common::Domain;
use crate::domain::Roi;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `ROI`: a single data row of current %, active loans, expected return.
impl TableRecord for Roi {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::Roi,
        header_rows: 1,
        fixed_rows: 1,
        detail_rows: false,
        required_cells: &[],
    };

    fn absorb_fixed(&mut self, _index: usize, row: Row<'_>) {
        self.current = row.number(0);
        self.active_loans = row.number(1);
        self.expected_return = row.number(2);
    }
}
