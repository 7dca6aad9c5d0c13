use sheetrec_core::{CellValue, ConversionError, ConversionResult};
use std::collections::HashSet;

/// Validate a sheet's header row and return the header names.
///
/// Every cell must be text, non-empty after trimming, and unique by its raw
/// (untrimmed) text. Errors name the sheet and the offending column.
pub fn validate_headers<'a>(
    sheet: &str,
    header_row: &'a [CellValue],
) -> ConversionResult<Vec<&'a str>> {
    let mut seen = HashSet::with_capacity(header_row.len());
    let mut names = Vec::with_capacity(header_row.len());

    for (column, cell) in header_row.iter().enumerate() {
        let Some(name) = cell.as_text() else {
            return Err(ConversionError::NonTextHeader {
                sheet: sheet.to_string(),
                column,
                found: cell.type_name().to_string(),
            });
        };

        if name.trim().is_empty() {
            return Err(ConversionError::EmptyHeader {
                sheet: sheet.to_string(),
                column,
            });
        }

        if !seen.insert(name) {
            return Err(ConversionError::DuplicateHeader {
                sheet: sheet.to_string(),
                name: name.to_string(),
            });
        }

        names.push(name);
    }

    Ok(names)
}
