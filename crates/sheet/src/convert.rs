//! Sheet grid to record conversion.

use crate::header::validate_headers;
use crate::parse::parse_value;
use serde_json::Value;
use sheetrec_core::{
    CellValue, ConversionError, ConversionResult, Grid, Record, RecordSet, SheetSet,
};

/// Convert every sheet of a fetched document into records.
///
/// Sheets with fewer than two rows (no header or no data) map to an empty
/// list. An invalid header row in any sheet fails the whole conversion.
///
/// # Errors
///
/// Returns a `ConversionError` naming the first sheet whose header row is
/// invalid.
pub fn convert(input: &SheetSet) -> ConversionResult<RecordSet> {
    let mut records = RecordSet::with_capacity(input.len());
    for (sheet, grid) in input {
        records.insert(sheet.clone(), convert_sheet(sheet, grid)?);
    }
    Ok(records)
}

/// Convert a single sheet's grid into records.
///
/// # Errors
///
/// Returns a `ConversionError` if the header row is invalid.
pub fn convert_sheet(sheet: &str, grid: &[Vec<CellValue>]) -> ConversionResult<Vec<Record>> {
    let [header_row, data_rows @ ..] = grid else {
        return Ok(Vec::new());
    };
    if data_rows.is_empty() {
        return Ok(Vec::new());
    }

    validate_headers(sheet, header_row)?;
    tracing::debug!("Converting sheet '{}' ({} data rows)", sheet, data_rows.len());

    Ok(data_rows
        .iter()
        .map(|row| build_record(header_row, row))
        .collect())
}

/// Pair a data row with the header row by position.
///
/// Positions past the end of a short row are absent and emit no key.
fn build_record(header_row: &[CellValue], row: &[CellValue]) -> Record {
    let mut record = Record::with_capacity(header_row.len());
    for (i, header) in header_row.iter().enumerate() {
        // Always text once the row has been validated.
        let Some(name) = header.as_text() else {
            continue;
        };
        if let Some(cell) = row.get(i) {
            record.insert(name.to_string(), parse_value(cell));
        }
    }
    record
}

/// Convert a loosely-typed JSON sheet set (`{"Sheet": [[...], ...]}`).
///
/// Input that is not an object of arrays, or is an empty object, means there
/// is nothing to convert and yields an empty record set. Header rows are
/// still validated strictly; a data row that is not an array has no cells.
///
/// # Errors
///
/// Returns a `ConversionError` if a header row is not an array or is invalid.
pub fn convert_json(input: &Value) -> ConversionResult<RecordSet> {
    let Some(sheets) = input.as_object().filter(|sheets| !sheets.is_empty()) else {
        tracing::warn!("Sheet set is not a non-empty object; nothing to convert");
        return Ok(RecordSet::new());
    };
    if !sheets.values().all(Value::is_array) {
        tracing::warn!("Sheet set contains a non-array grid; nothing to convert");
        return Ok(RecordSet::new());
    }

    let mut sheet_set = SheetSet::with_capacity(sheets.len());
    for (sheet, grid) in sheets {
        let rows = grid.as_array().map(Vec::as_slice).unwrap_or_default();
        if rows.len() >= 2 && !rows[0].is_array() {
            return Err(ConversionError::HeaderRowNotArray {
                sheet: sheet.clone(),
            });
        }
        sheet_set.insert(sheet.clone(), json_grid(rows));
    }

    convert(&sheet_set)
}

fn json_grid(rows: &[Value]) -> Grid {
    rows.iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(CellValue::from_json).collect())
                .unwrap_or_default()
        })
        .collect()
}
