//! Record conversion for sheetrec
//!
//! Turns fetched sheet grids into records keyed by each sheet's header row.
//! Row 0 of every sheet names the fields; each following row becomes one
//! record, with text cells inferred as integers, floats or booleans where
//! they match.
//!
//! # Examples
//!
//! ```
//! use sheetrec_core::{CellValue, RecordValue, SheetSet};
//! use sheetrec_sheet::convert;
//!
//! let mut sheets = SheetSet::new();
//! sheets.insert(
//!     "Sheet1".to_string(),
//!     vec![
//!         vec![CellValue::from("Name"), CellValue::from("Age")],
//!         vec![CellValue::from("Alice"), CellValue::from("30")],
//!     ],
//! );
//!
//! let records = convert(&sheets).unwrap();
//! let alice = &records["Sheet1"][0];
//! assert_eq!(alice["Name"], RecordValue::from("Alice"));
//! assert_eq!(alice["Age"], RecordValue::Int(30));
//! ```
//!
//! Header rows must be unique, non-empty text. A single bad header fails the
//! whole conversion, not just its sheet.

mod convert;
mod header;
mod parse;

/// Re-export conversion entry points.
pub use convert::{convert, convert_json, convert_sheet};
/// Re-export header validation.
pub use header::validate_headers;
/// Re-export value parsing.
pub use parse::parse_value;
