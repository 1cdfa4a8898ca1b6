use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::app::ports::SheetSource;
use crate::common::{Domain, RawTable};
use crate::error::{DashboardError, Result};

/// Sheet source backed by tables held in memory, for tests and offline runs.
///
/// Fetching a domain with no table registered fails, which lets callers
/// exercise the fallback path.
#[derive(Clone, Default)]
pub struct InMemorySheetSource {
    tables: Arc<Mutex<HashMap<Domain, RawTable>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl InMemorySheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, domain: Domain, table: RawTable) -> Self {
        self.set_table(domain, table);
        self
    }

    pub fn set_table(&self, domain: Domain, table: RawTable) {
        self.tables.lock().unwrap().insert(domain, table);
    }

    pub fn remove_table(&self, domain: Domain) {
        self.tables.lock().unwrap().remove(&domain);
    }

    /// Ranges requested so far, in call order.
    pub fn requested_ranges(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl SheetSource for InMemorySheetSource {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn fetch(&self, domain: Domain, range: &str) -> Result<RawTable> {
        self.requested.lock().unwrap().push(range.to_string());
        self.tables
            .lock()
            .unwrap()
            .get(&domain)
            .cloned()
            .ok_or_else(|| DashboardError::MissingTable(domain.to_string()))
    }
}
