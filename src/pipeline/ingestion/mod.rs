// Pipeline ingestion: pulling every domain's raw table from a sheet source

use std::time::Instant;
use tracing::{debug, instrument};

use crate::app::ports::SheetSource;
use crate::common::{Domain, RawTable, RawTables};
use crate::config::SheetTabs;
use crate::error::Result;

async fn fetch_one(source: &dyn SheetSource, tabs: &SheetTabs, domain: Domain) -> Result<RawTable> {
    let range = tabs.range_for(domain);
    source.fetch(domain, &range).await
}

/// Fetch all seven domain tables concurrently.
///
/// All fetches must succeed: the first error is returned and the partial
/// results are dropped. There is no per-table retry.
#[instrument(skip_all, fields(source = source.name()))]
pub async fn fetch_all_tables(source: &dyn SheetSource, tabs: &SheetTabs) -> Result<RawTables> {
    let t0 = Instant::now();
    let (stock, costs, roi, cash_flow, equipment, maintenance, sales) = tokio::try_join!(
        fetch_one(source, tabs, Domain::Stock),
        fetch_one(source, tabs, Domain::Costs),
        fetch_one(source, tabs, Domain::Roi),
        fetch_one(source, tabs, Domain::CashFlow),
        fetch_one(source, tabs, Domain::Equipment),
        fetch_one(source, tabs, Domain::Maintenance),
        fetch_one(source, tabs, Domain::Sales),
    )?;

    let tables = RawTables::new()
        .with(Domain::Stock, stock)
        .with(Domain::Costs, costs)
        .with(Domain::Roi, roi)
        .with(Domain::CashFlow, cash_flow)
        .with(Domain::Equipment, equipment)
        .with(Domain::Maintenance, maintenance)
        .with(Domain::Sales, sales);

    debug!(
        tables = tables.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Fetched all sheet ranges"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::infra::InMemorySheetSource;

    fn full_source() -> InMemorySheetSource {
        Domain::ALL.into_iter().fold(InMemorySheetSource::new(), |src, domain| {
            src.with_table(domain, RawTable::from_rows(vec![vec![domain.as_str()]]))
        })
    }

    #[tokio::test]
    async fn test_fetches_every_configured_range() {
        let source = full_source();
        let tables = fetch_all_tables(&source, &SheetTabs::default()).await.unwrap();
        assert_eq!(tables.len(), 7);

        let mut ranges = source.requested_ranges();
        ranges.sort();
        assert_eq!(
            ranges,
            vec![
                "Custos!A:E",
                "Equipamentos!A:E",
                "Estoque!A:C",
                "FluxoCaixa!A:F",
                "Manutencao!A:D",
                "ROI!A:D",
                "Vendas!A:G",
            ]
        );
    }

    #[tokio::test]
    async fn test_single_missing_table_fails_everything() {
        let source = full_source();
        source.remove_table(Domain::Maintenance);
        let result = fetch_all_tables(&source, &SheetTabs::default()).await;
        assert!(matches!(result, Err(DashboardError::MissingTable(d)) if d == "maintenance"));
    }
}
