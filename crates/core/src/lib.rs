//! # sheetrec-core
//!
//! Core types shared by the sheetrec crates.
//!
//! This crate provides:
//! - Raw grid cell values as delivered by a spreadsheet source
//! - Typed record values produced by conversion
//! - Error types for fetching, conversion and the public `get` operation

/// Raw cell values and grid aliases.
pub mod cell;
/// Error types and result aliases.
pub mod error;
/// Record value types.
pub mod value;

/// Re-export cell types.
pub use cell::{CellValue, Grid, SheetSet};
/// Re-export error types.
pub use error::{
    ConversionError, ConversionResult, FetchError, FetchResult, GetError, GetResult,
};
/// Re-export record types.
pub use value::{records_to_json, Record, RecordSet, RecordValue};
