//! Type inference for individual cell values.

use regex::Regex;
use sheetrec_core::{CellValue, RecordValue};

// Only ASCII digits count; `\d` would also match digits from other scripts.
fn integer_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid regex"))
}

fn float_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]*\.[0-9]+$").expect("valid regex"))
}

/// Parse a raw cell into a typed record value.
///
/// Only text cells are inferred:
/// - digits only (`"42"`, `"007"`) become integers
/// - optional digits, a dot, then digits (`"3.14"`, `".5"`) become floats
/// - `true` / `false` in any case become booleans
///
/// Signs, exponents, thousands separators, surrounding whitespace and a
/// trailing dot (`"5."`) are not numbers here; such text is kept as is.
/// Cells already typed by the source pass through unchanged.
#[must_use]
pub fn parse_value(cell: &CellValue) -> RecordValue {
    let CellValue::String(text) = cell else {
        return RecordValue::from(cell.clone());
    };

    if integer_regex().is_match(text) {
        // Too many digits for i64 still reads as a number.
        return match text.parse::<i64>() {
            Ok(n) => RecordValue::Int(n),
            Err(_) => text
                .parse::<f64>()
                .map_or_else(|_| RecordValue::Text(text.clone()), RecordValue::Float),
        };
    }

    if float_regex().is_match(text) {
        if let Ok(f) = text.parse::<f64>() {
            return RecordValue::Float(f);
        }
    }

    if text.eq_ignore_ascii_case("true") {
        return RecordValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return RecordValue::Bool(false);
    }

    RecordValue::Text(text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::String(s.to_string())
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_value(&text("42")), RecordValue::Int(42));
        assert_eq!(parse_value(&text("0")), RecordValue::Int(0));
        assert_eq!(parse_value(&text("007")), RecordValue::Int(7));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(
            parse_value(&text("99999999999999999999")),
            RecordValue::Float(1e20)
        );
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_floats() {
        assert_eq!(parse_value(&text("3.14")), RecordValue::Float(3.14));
        assert_eq!(parse_value(&text(".5")), RecordValue::Float(0.5));
        assert_eq!(parse_value(&text("0.25")), RecordValue::Float(0.25));
    }

    #[test]
    fn test_narrow_numeric_rules_keep_text() {
        for raw in ["5.", "-1", "+1", "-2.5", "1e5", "1,000", " 42", "42 ", "1.2.3", "", "."] {
            assert_eq!(
                parse_value(&text(raw)),
                RecordValue::Text(raw.to_string()),
                "{raw:?} should stay text"
            );
        }
    }

    #[test]
    fn test_non_ascii_digits_keep_text() {
        // Arabic-Indic digits
        let raw = "\u{0664}\u{0662}";
        assert_eq!(parse_value(&text(raw)), RecordValue::Text(raw.to_string()));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(parse_value(&text("true")), RecordValue::Bool(true));
        assert_eq!(parse_value(&text("TRUE")), RecordValue::Bool(true));
        assert_eq!(parse_value(&text("True")), RecordValue::Bool(true));
        assert_eq!(parse_value(&text("false")), RecordValue::Bool(false));
        assert_eq!(parse_value(&text("FaLsE")), RecordValue::Bool(false));
        assert_eq!(parse_value(&text("yes")), RecordValue::Text("yes".to_string()));
        assert_eq!(
            parse_value(&text(" true")),
            RecordValue::Text(" true".to_string())
        );
    }

    #[test]
    fn test_typed_cells_pass_through() {
        assert_eq!(parse_value(&CellValue::Null), RecordValue::Null);
        assert_eq!(parse_value(&CellValue::Int(42)), RecordValue::Int(42));
        assert_eq!(parse_value(&CellValue::Float(1.5)), RecordValue::Float(1.5));
        assert_eq!(parse_value(&CellValue::Bool(true)), RecordValue::Bool(true));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            parse_value(&text("Alice")),
            RecordValue::Text("Alice".to_string())
        );
    }
}
