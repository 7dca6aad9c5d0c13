//! # sheetrec-http
//!
//! Fetches every sheet of a spreadsheet document as a cell grid.
//!
//! Access to the spreadsheet service goes through the [`SheetsApi`] trait so
//! fetching can run against any backend. [`HttpSheetsApi`] implements it over
//! the Google Sheets v4 REST API with a static bearer token.

mod api;
mod client;
mod fetcher;

pub use api::SheetsApi;
pub use client::{HttpSheetsApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use fetcher::SheetFetcher;
