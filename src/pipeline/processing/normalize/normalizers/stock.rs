use crate::common::Domain;
use crate::domain::Stock;
use crate::pipeline::processing::normalize::coerce::stock_key;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `Estoque`: label in column A, tons in column B. Only the three known
/// aggregates are kept; any other label is ignored.
impl TableRecord for Stock {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::Stock,
        header_rows: 1,
        fixed_rows: 0,
        detail_rows: true,
        required_cells: &[0],
    };

    fn absorb_detail(&mut self, row: Row<'_>) {
        let Some(label) = row.text(0) else { return };
        let slot = match stock_key(label).as_str() {
            "brita0" => &mut self.brita0,
            "brita1" => &mut self.brita1,
            "pedrisco" => &mut self.pedrisco,
            _ => return,
        };
        *slot = row.number(1);
    }
}
