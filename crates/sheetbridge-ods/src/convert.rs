//! Conversions between OpenDocument values and [`CellValue`]

use sheetbridge_core::{CellValue, Error, Result};
use spreadsheet_ods::Value;

/// Generic value of an OpenDocument cell
///
/// Currency and percentage cells read as plain numbers. Durations have no
/// generic counterpart and fail with [`Error::UnhandledCellType`].
pub fn ods_to_value(value: &Value, row: u32, col: u32) -> Result<CellValue> {
    match value {
        Value::Empty => Ok(CellValue::Empty),
        Value::Boolean(b) => Ok(CellValue::Boolean(*b)),
        Value::Number(n) | Value::Percentage(n) | Value::Currency(n, _) => {
            Ok(CellValue::Number(*n))
        }
        Value::Text(_) | Value::TextXml(_) => {
            Ok(CellValue::Text(value.as_cow_str_or("").into_owned()))
        }
        Value::DateTime(dt) => Ok(CellValue::DateTime(*dt)),
        #[allow(unreachable_patterns)]
        other => Err(Error::UnhandledCellType {
            native: value_type_name(other).to_string(),
            row,
            col,
        }),
    }
}

/// Native value for a generic one
pub fn value_to_ods(value: CellValue) -> Value {
    match value {
        CellValue::Empty => Value::Empty,
        CellValue::Text(s) => Value::Text(s),
        CellValue::Number(n) => Value::Number(n),
        CellValue::Boolean(b) => Value::Boolean(b),
        CellValue::DateTime(dt) => Value::DateTime(dt),
    }
}

/// Displayed text of a value
pub fn ods_text(value: &Value) -> String {
    match value {
        Value::Empty => String::new(),
        Value::Text(_) | Value::TextXml(_) => value.as_cow_str_or("").into_owned(),
        Value::TimeDuration(d) => d.to_string(),
        other => ods_to_value(other, 0, 0)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Empty => "empty",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "float",
        Value::Percentage(_) => "percentage",
        Value::Currency(_, _) => "currency",
        Value::Text(_) | Value::TextXml(_) => "string",
        Value::DateTime(_) => "date",
        Value::TimeDuration(_) => "time",
        #[allow(unreachable_patterns)]
        _ => "unknown",
    }
}
