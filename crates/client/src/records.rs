use crate::config::ClientConfig;
use sheetrec_core::{records_to_json, GetResult, RecordSet};
use sheetrec_http::{HttpSheetsApi, SheetFetcher, SheetsApi};

/// Reads spreadsheet documents as records.
///
/// Each call fetches the document fresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SheetRecords<A = HttpSheetsApi> {
    fetcher: SheetFetcher<A>,
}

impl SheetRecords<HttpSheetsApi> {
    /// Client for the public Sheets endpoint authenticated with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns `GetError::Fetch` if the HTTP client cannot be built.
    pub fn new(access_token: impl Into<String>) -> GetResult<Self> {
        Self::from_config(&ClientConfig::new(access_token))
    }

    /// Client built from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns `GetError::Fetch` if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &ClientConfig) -> GetResult<Self> {
        let api = HttpSheetsApi::with_options(
            config.access_token.clone(),
            &config.base_url,
            config.timeout_secs,
        )?;
        Ok(Self::with_api(api))
    }

    /// Client configured from `SHEETS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `GetError::Config` if the environment is incomplete, or
    /// `GetError::Fetch` if the HTTP client cannot be built.
    pub fn from_env() -> GetResult<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }
}

impl<A: SheetsApi> SheetRecords<A> {
    /// Client over any spreadsheet service.
    pub fn with_api(api: A) -> Self {
        Self {
            fetcher: SheetFetcher::new(api),
        }
    }

    /// The underlying spreadsheet service.
    pub fn api(&self) -> &A {
        self.fetcher.api()
    }

    /// Fetch a document and convert every sheet into records.
    ///
    /// Either every sheet converts or the call fails; there are no partial
    /// results.
    ///
    /// # Errors
    ///
    /// Returns `GetError::Fetch` if the document or any sheet cannot be
    /// retrieved, and `GetError::Conversion` if any sheet's header row is
    /// invalid.
    pub async fn get(&self, document_id: &str) -> GetResult<RecordSet> {
        let sheets = self.fetcher.fetch(document_id).await?;
        let records = sheetrec_sheet::convert(&sheets)?;
        tracing::debug!(
            "Converted {} sheets ({} records) from document {}",
            records.len(),
            records.values().map(Vec::len).sum::<usize>(),
            document_id
        );
        Ok(records)
    }

    /// Like [`SheetRecords::get`], rendered as a JSON object keyed by sheet name.
    ///
    /// # Errors
    ///
    /// Same as [`SheetRecords::get`].
    pub async fn get_json(&self, document_id: &str) -> GetResult<serde_json::Value> {
        let records = self.get(document_id).await?;
        Ok(records_to_json(&records))
    }
}
