use crate::api::SheetsApi;
use sheetrec_core::{FetchError, FetchResult, SheetSet};

/// Fetches every sheet of a document through a [`SheetsApi`].
#[derive(Debug, Clone)]
pub struct SheetFetcher<A> {
    api: A,
}

impl<A: SheetsApi> SheetFetcher<A> {
    /// Create a fetcher over the given service.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying service.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch all sheets of a document.
    ///
    /// Lists the sheet names, then requests every sheet's values concurrently.
    /// A sheet without data becomes an empty grid. Sheets keep the order the
    /// service listed them in.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidDocumentId` for a blank id. Otherwise
    /// returns the first error from listing or from any sheet; requests still
    /// in flight are dropped and no partial result is returned.
    pub async fn fetch(&self, document_id: &str) -> FetchResult<SheetSet> {
        if document_id.trim().is_empty() {
            return Err(FetchError::InvalidDocumentId(document_id.to_string()));
        }

        let names = self.api.sheet_names(document_id).await?;
        tracing::debug!("Document {} has {} sheets", document_id, names.len());

        let requests = names.into_iter().map(move |name| async move {
            let grid = self.api.sheet_values(document_id, &name).await?;
            Ok::<_, FetchError>((name, grid.unwrap_or_default()))
        });
        let sheets: SheetSet = futures::future::try_join_all(requests)
            .await?
            .into_iter()
            .collect();

        tracing::info!("Fetched {} sheets from document {}", sheets.len(), document_id);
        Ok(sheets)
    }
}
