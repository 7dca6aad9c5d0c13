use async_trait::async_trait;
use sheetrec_core::{FetchResult, Grid};

/// Read access to a spreadsheet service.
#[async_trait]
pub trait SheetsApi: Send + Sync {
    /// List the document's sheet names, in document order.
    async fn sheet_names(&self, document_id: &str) -> FetchResult<Vec<String>>;

    /// Get the cell grid of one sheet.
    ///
    /// Returns `None` when the service has no data for the sheet.
    async fn sheet_values(&self, document_id: &str, sheet: &str) -> FetchResult<Option<Grid>>;
}
