use crate::common::{Domain, RawTable};

use super::coerce::{is_present, number_or_zero};

/// How a domain's sheet is laid out.
///
/// All domains share the same shape: some header rows, optionally a number of
/// positional rows (ROI's single data row, the Sales totals row), then detail
/// rows that are only read when the cells the domain needs are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub domain: Domain,
    pub header_rows: usize,
    pub fixed_rows: usize,
    pub detail_rows: bool,
    /// Detail rows with any of these cells empty are skipped.
    pub required_cells: &'static [usize],
}

/// Borrowed view of one sheet row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [String],
}

impl<'a> Row<'a> {
    pub fn new(cells: &'a [String]) -> Self {
        Self { cells }
    }

    pub fn text(&self, col: usize) -> Option<&'a str> {
        self.cells.get(col).map(String::as_str)
    }

    pub fn number(&self, col: usize) -> f64 {
        number_or_zero(self.text(col))
    }

    pub fn is_present(&self, col: usize) -> bool {
        is_present(self.text(col))
    }
}

/// A normalized record that can be filled from a raw table.
///
/// `Default` is the fallback shape; the hooks only ever add to it.
pub trait TableRecord: Default {
    const LAYOUT: TableLayout;

    /// Called for each positional row, `index` counting from the first row after the header.
    fn absorb_fixed(&mut self, _index: usize, _row: Row<'_>) {}

    fn absorb_detail(&mut self, _row: Row<'_>) {}

    /// Derive aggregate fields once all rows are in.
    fn finish(&mut self) {}
}

/// Turn a raw table into a fully-populated record.
///
/// Never fails: a missing table, or one with nothing beyond the header,
/// yields `R::default()`.
pub fn normalize<R: TableRecord>(table: Option<&RawTable>) -> R {
    let mut record = R::default();
    let layout = R::LAYOUT;

    let table = match table {
        Some(t) if t.has_rows_after(layout.header_rows) => t,
        _ => return record,
    };

    let mut rows = table.rows.iter().skip(layout.header_rows);

    for index in 0..layout.fixed_rows {
        match rows.next() {
            Some(cells) => record.absorb_fixed(index, Row::new(cells)),
            None => break,
        }
    }

    if layout.detail_rows {
        for cells in rows {
            let row = Row::new(cells);
            if layout.required_cells.iter().all(|&col| row.is_present(col)) {
                record.absorb_detail(row);
            }
        }
    }

    record.finish();
    record
}
