use tracing::debug;

use super::layout::{normalize, TableLayout, TableRecord};
use crate::common::{Domain, RawTables};
use crate::domain::{CashFlow, Costs, DashboardData, Equipment, Maintenance, Roi, Sales, Stock};

/// Layout used to read a domain's sheet.
pub fn layout_for(domain: Domain) -> &'static TableLayout {
    match domain {
        Domain::Stock => &Stock::LAYOUT,
        Domain::Costs => &Costs::LAYOUT,
        Domain::Roi => &Roi::LAYOUT,
        Domain::CashFlow => &CashFlow::LAYOUT,
        Domain::Equipment => &Equipment::LAYOUT,
        Domain::Maintenance => &Maintenance::LAYOUT,
        Domain::Sales => &Sales::LAYOUT,
    }
}

fn normalize_domain<R: TableRecord>(tables: &RawTables) -> R {
    let domain = R::LAYOUT.domain;
    let table = tables.get(domain);
    debug!(
        domain = %domain,
        rows = table.map(|t| t.len()).unwrap_or(0),
        "Normalizing table"
    );
    normalize(table)
}

/// Normalize every domain. Domains without a table get their default record.
pub fn normalize_all(tables: &RawTables) -> DashboardData {
    DashboardData {
        stock: normalize_domain(tables),
        costs: normalize_domain(tables),
        roi: normalize_domain(tables),
        cash_flow: normalize_domain(tables),
        equipment: normalize_domain(tables),
        maintenance: normalize_domain(tables),
        sales: normalize_domain(tables),
    }
}
