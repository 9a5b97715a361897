//! Conversions between calamine cell data and [`CellValue`]

use calamine::Data;
use log::warn;
use sheetbridge_core::{parse_iso_datetime, CellValue, Error, Result};

/// Generic value of a stored cell
///
/// Error cells read back as the error's text (e.g. `#DIV/0!`). Durations have
/// no generic counterpart and fail with [`Error::UnhandledCellType`].
pub fn data_to_value(data: &Data, row: u32, col: u32) -> Result<CellValue> {
    match data {
        Data::Empty => Ok(CellValue::Empty),
        Data::String(s) => Ok(CellValue::Text(s.clone())),
        Data::Float(f) => Ok(CellValue::Number(*f)),
        Data::Int(i) => Ok(CellValue::Number(*i as f64)),
        Data::Bool(b) => Ok(CellValue::Boolean(*b)),
        Data::DateTime(dt) if dt.is_duration() => Err(Error::UnhandledCellType {
            native: "duration".to_string(),
            row,
            col,
        }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Ok(CellValue::DateTime(datetime)),
            None => {
                warn!("date serial {} in cell [{row}, {col}] is out of range", dt.as_f64());
                Ok(CellValue::Number(dt.as_f64()))
            }
        },
        Data::DateTimeIso(s) => Ok(parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone()))),
        Data::DurationIso(_) => Err(Error::UnhandledCellType {
            native: "duration".to_string(),
            row,
            col,
        }),
        Data::Error(e) => Ok(CellValue::Text(e.to_string())),
    }
}

/// Native data for a value written through the generic API
///
/// Dates are kept as ISO 8601 text, with fractional seconds when present.
pub fn value_to_data(value: CellValue) -> Data {
    match value {
        CellValue::Empty => Data::Empty,
        CellValue::Text(s) => Data::String(s),
        CellValue::Number(n) => Data::Float(n),
        CellValue::Boolean(b) => Data::Bool(b),
        CellValue::DateTime(dt) => {
            Data::DateTimeIso(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }
    }
}

/// Formatted text of a stored cell, as it would display
pub fn data_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) if dt.is_duration() => dt.as_f64().to_string(),
        other => data_to_value(other, 0, 0)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    }
}
