//! Typed record values produced from sheet rows.

use crate::cell::CellValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One converted row: header name to typed value, in header order.
pub type Record = IndexMap<String, RecordValue>;

/// Sheet name to its records, rows in source order.
pub type RecordSet = IndexMap<String, Vec<Record>>;

/// Typed value of a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Null value.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value (64-bit).
    Int(i64),

    /// Float value (64-bit).
    Float(f64),

    /// Text value.
    Text(String),
}

impl RecordValue {
    /// Convert to `serde_json::Value`.
    ///
    /// Non-finite floats have no JSON number form and are written as text.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(n) => serde_json::Value::Number((*n).into()),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(f.to_string())),
            Self::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Cells map onto record values unchanged; no type inference happens here.
impl From<CellValue> for RecordValue {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Null => Self::Null,
            CellValue::Bool(b) => Self::Bool(b),
            CellValue::Int(n) => Self::Int(n),
            CellValue::Float(f) => Self::Float(f),
            CellValue::String(s) => Self::Text(s),
        }
    }
}

impl From<&str> for RecordValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Render a record set as a JSON object of arrays of objects.
#[must_use]
pub fn records_to_json(records: &RecordSet) -> serde_json::Value {
    let sheets = records
        .iter()
        .map(|(sheet, rows)| {
            let rows = rows
                .iter()
                .map(|record| {
                    serde_json::Value::Object(
                        record.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
                    )
                })
                .collect();
            (sheet.clone(), serde_json::Value::Array(rows))
        })
        .collect();
    serde_json::Value::Object(sheets)
}
