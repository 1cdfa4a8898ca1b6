use async_trait::async_trait;

use crate::common::{Domain, RawTable};
use crate::error::Result;

/// Where raw tables come from.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetch the raw rows for `domain`, read from `range` (A1 notation, e.g. `Estoque!A:C`).
    async fn fetch(&self, domain: Domain, range: &str) -> Result<RawTable>;
}
