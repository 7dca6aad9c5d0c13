//! Google Sheets v4 REST client.

use crate::api::SheetsApi;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sheetrec_core::{CellValue, FetchError, FetchResult, Grid};
use std::time::Duration;

/// Default Google Sheets API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sheets API client authenticated with a static bearer token.
#[derive(Clone)]
pub struct HttpSheetsApi {
    client: Client,
    base_url: Url,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<serde_json::Value>>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl HttpSheetsApi {
    /// Constructs a client against the public Sheets endpoint with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if building the underlying HTTP client fails.
    pub fn new(access_token: impl Into<String>) -> FetchResult<Self> {
        Self::with_options(access_token, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    /// Constructs a client with a custom endpoint and per-request timeout.
    ///
    /// The endpoint is the scheme and host (plus any path prefix) that the
    /// `/v4/spreadsheets/...` paths are appended to. Proxy discovery is disabled.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the base URL is invalid or building the
    /// underlying HTTP client fails.
    ///
    /// # Examples
    ///
    /// ```
    /// let api = sheetrec_http::HttpSheetsApi::with_options("token", "http://localhost:8080", 10).unwrap();
    /// ```
    pub fn with_options(
        access_token: impl Into<String>,
        base_url: &str,
        timeout_secs: u64,
    ) -> FetchResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::Client(format!("Invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Client(format!(
                "Base URL cannot carry a path: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/v4/spreadsheets/{document_id}/{tail...}` with each part
    /// percent-encoded as a path segment.
    fn document_url(&self, document_id: &str, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", document_id])
                .extend(tail);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> FetchResult<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown").to_string());
            tracing::warn!("Sheets API returned HTTP {}: {}", status.as_u16(), message);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for HttpSheetsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSheetsApi")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Quote a sheet name as an A1 range covering the whole sheet.
fn sheet_range(sheet: &str) -> String {
    format!("'{}'", sheet.replace('\'', "''"))
}

#[async_trait]
impl SheetsApi for HttpSheetsApi {
    async fn sheet_names(&self, document_id: &str) -> FetchResult<Vec<String>> {
        let url = self.document_url(document_id, &[]);
        let metadata: SpreadsheetMetadata = self
            .get_json(url, &[("fields", "sheets.properties.title")])
            .await?;

        Ok(metadata
            .sheets
            .into_iter()
            .map(|entry| entry.properties.title)
            .collect())
    }

    async fn sheet_values(&self, document_id: &str, sheet: &str) -> FetchResult<Option<Grid>> {
        let range = sheet_range(sheet);
        let url = self.document_url(document_id, &["values", range.as_str()]);
        let body: ValueRange = self
            .get_json(
                url,
                &[
                    ("valueRenderOption", "UNFORMATTED_VALUE"),
                    ("majorDimension", "ROWS"),
                ],
            )
            .await?;

        Ok(body.values.map(|rows| {
            rows.iter()
                .map(|row| row.iter().map(CellValue::from_json).collect())
                .collect()
        }))
    }
}
