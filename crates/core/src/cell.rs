use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A sheet's cell grid: rows of cells, in source order.
///
/// Rows may be shorter than the header row when trailing cells are empty.
pub type Grid = Vec<Vec<CellValue>>;

/// Sheet name to grid, as fetched from one document.
pub type SheetSet = IndexMap<String, Grid>;

/// A raw cell value as delivered by the spreadsheet source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Convert a JSON value from an API response into a cell.
    ///
    /// Arrays and objects never appear in a well-formed values response;
    /// they are kept as their JSON text.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(n.to_string())
                }
            }
            serde_json::Value::String(s) => CellValue::String(s.clone()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                CellValue::String(value.to_string())
            }
        }
    }

    /// Borrow the text of a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value's type, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "boolean",
            CellValue::Int(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "text",
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(CellValue::from_json(&json!(null)), CellValue::Null);
        assert_eq!(CellValue::from_json(&json!(true)), CellValue::Bool(true));
        assert_eq!(CellValue::from_json(&json!(42)), CellValue::Int(42));
        assert_eq!(CellValue::from_json(&json!(2.5)), CellValue::Float(2.5));
        assert_eq!(
            CellValue::from_json(&json!("Alice")),
            CellValue::String("Alice".to_string())
        );
    }

    #[test]
    fn test_from_json_nested_kept_as_text() {
        let cell = CellValue::from_json(&json!([1, 2]));
        assert_eq!(cell, CellValue::String("[1,2]".to_string()));
    }

    #[test]
    fn test_text_accessors() {
        let cell = CellValue::from("Name");
        assert_eq!(cell.as_text(), Some("Name"));
        assert_eq!(CellValue::Int(1).as_text(), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(CellValue::Null.type_name(), "null");
        assert_eq!(CellValue::Bool(false).type_name(), "boolean");
        assert_eq!(CellValue::Int(1).type_name(), "integer");
        assert_eq!(CellValue::Float(1.0).type_name(), "float");
        assert_eq!(CellValue::from("x").type_name(), "text");
    }
}
