use crate::common::Domain;
use crate::domain::Equipment;
use crate::pipeline::processing::normalize::coerce::equipment_key;
use crate::pipeline::processing::normalize::layout::{Row, TableLayout, TableRecord};

/// `Equipamentos`: label and depreciation amount. Every labelled row with an
/// amount becomes an entry, whatever the label.
impl TableRecord for Equipment {
    const LAYOUT: TableLayout = TableLayout {
        domain: Domain::Equipment,
        header_rows: 1,
        fixed_rows: 0,
        detail_rows: true,
        required_cells: &[0, 1],
    };

    fn absorb_detail(&mut self, row: Row<'_>) {
        if let Some(label) = row.text(0) {
            self.insert(equipment_key(label), row.number(1));
        }
    }
}
