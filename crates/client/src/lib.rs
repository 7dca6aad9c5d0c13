//! # sheetrec
//!
//! Reads every sheet of a spreadsheet document as a list of records.
//!
//! The first row of each sheet names the fields. Each following row becomes a
//! record mapping those names to typed values: digit-only text becomes an
//! integer, `1.5`-style text a float, `true`/`false` a boolean.
//!
//! ```no_run
//! # async fn run() -> Result<(), sheetrec::GetError> {
//! let client = sheetrec::SheetRecords::new("ya29.access-token")?;
//! let records = client.get("1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms").await?;
//! for (sheet, rows) in &records {
//!     println!("{sheet}: {} rows", rows.len());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod records;

pub use config::{ClientConfig, ENV_ACCESS_TOKEN, ENV_BASE_URL, ENV_TIMEOUT_SECS};
pub use records::SheetRecords;

pub use sheetrec_core::{
    CellValue, ConversionError, FetchError, GetError, GetResult, Grid, Record, RecordSet,
    RecordValue, SheetSet,
};
pub use sheetrec_http::{HttpSheetsApi, SheetsApi};
