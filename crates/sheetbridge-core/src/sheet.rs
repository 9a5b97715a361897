//! The sheet abstraction shared by all backends

use chrono::NaiveDateTime;

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::style::CellFormat;
use crate::value::{CellKind, CellValue};
use crate::MAX_SHEET_NAME_LEN;

/// A named grid of cells inside a [`Spreadsheet`](crate::Spreadsheet)
///
/// Sheets are views: they do not own the document, and every operation other
/// than [`name`](Sheet::name) fails with [`Error::Closed`] once the owning
/// spreadsheet has been closed. Coordinates are 0-based.
///
/// Mutations fail with [`Error::ReadOnly`] when the owning spreadsheet was
/// opened read-only. Writing [`CellValue::Empty`] is a silent no-op; it does
/// not clear the cell.
pub trait Sheet {
    /// Sheet name
    fn name(&self) -> &str;

    /// Backend this sheet belongs to
    fn backend(&self) -> Backend;

    /// Whether the owning spreadsheet accepts mutations
    fn is_editable(&self) -> bool;

    /// Backend-native row dimension (highest used row index + 1)
    ///
    /// May count trailing rows that hold no value, depending on how the
    /// backend tracks dimensions.
    fn row_count(&self) -> Result<u32>;

    /// Backend-native column dimension (highest used column index + 1)
    fn column_count(&self) -> Result<u32>;

    /// Index of the last populated cell in `row`, plus one; 0 if the row is empty
    fn last_populated_column(&self, row: u32) -> Result<u32>;

    /// Display or formula text of a cell, empty for empty cells
    fn raw_text(&self, row: u32, col: u32) -> Result<String>;

    /// Typed value of a cell, [`CellValue::Empty`] if absent
    fn value(&self, row: u32, col: u32) -> Result<CellValue>;

    /// Write `value`, applying `format` when given
    ///
    /// Without a format the backend keeps whatever format the cell already
    /// has, or uses its default.
    fn set_value_with_format(
        &mut self,
        row: u32,
        col: u32,
        value: CellValue,
        format: Option<&CellFormat>,
    ) -> Result<()>;

    /// Fit the widths of columns `from..to` to their content
    fn auto_size(&mut self, from: u32, to: u32) -> Result<()>;

    /// Hide a column
    fn hide_column(&mut self, col: u32) -> Result<()>;

    /// Fail with [`Error::ReadOnly`] unless the sheet accepts mutations
    fn check_editable(&self) -> Result<()> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(Error::ReadOnly(format!("sheet '{}'", self.name())))
        }
    }

    /// Number of rows from the top down to the last one holding a value
    ///
    /// Scans upwards from `row_count() - 1`. Returns 1 when only row 0 is
    /// populated and 0 for an empty sheet.
    fn last_populated_row(&self) -> Result<u32> {
        let mut row = self.row_count()?;
        while row > 0 {
            if self.last_populated_column(row - 1)? != 0 {
                return Ok(row);
            }
            row -= 1;
        }
        Ok(0)
    }

    /// Values of columns `0..column_count()` in `row`
    fn row_values(&self, row: u32) -> Result<Vec<CellValue>> {
        let count = self.column_count()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        self.row_values_in(row, 0, count - 1)
    }

    /// Values of columns `from..=to` in `row`
    fn row_values_in(&self, row: u32, from: u32, to: u32) -> Result<Vec<CellValue>> {
        (from..=to).map(|col| self.value(row, col)).collect()
    }

    /// Text of a cell, `None` if empty
    fn text(&self, row: u32, col: u32) -> Result<Option<String>> {
        match self.value(row, col)? {
            CellValue::Empty => Ok(None),
            CellValue::Text(s) => Ok(Some(s)),
            other => Err(Error::type_mismatch(CellKind::Text, other.kind(), row, col)),
        }
    }

    /// Number held by a cell, `None` if empty
    fn number(&self, row: u32, col: u32) -> Result<Option<f64>> {
        match self.value(row, col)? {
            CellValue::Empty => Ok(None),
            CellValue::Number(n) => Ok(Some(n)),
            other => Err(Error::type_mismatch(CellKind::Number, other.kind(), row, col)),
        }
    }

    /// Date held by a cell, `None` if empty
    fn date(&self, row: u32, col: u32) -> Result<Option<NaiveDateTime>> {
        match self.value(row, col)? {
            CellValue::Empty => Ok(None),
            CellValue::DateTime(dt) => Ok(Some(dt)),
            other => Err(Error::type_mismatch(
                CellKind::DateTime,
                other.kind(),
                row,
                col,
            )),
        }
    }

    /// Boolean held by a cell, `None` if empty
    fn boolean(&self, row: u32, col: u32) -> Result<Option<bool>> {
        match self.value(row, col)? {
            CellValue::Empty => Ok(None),
            CellValue::Boolean(b) => Ok(Some(b)),
            other => Err(Error::type_mismatch(
                CellKind::Boolean,
                other.kind(),
                row,
                col,
            )),
        }
    }

    /// Write a value, keeping the cell's format
    fn set_value(&mut self, row: u32, col: u32, value: CellValue) -> Result<()> {
        self.set_value_with_format(row, col, value, None)
    }

    fn set_text(&mut self, row: u32, col: u32, text: &str) -> Result<()> {
        self.set_value(row, col, CellValue::text(text))
    }

    fn set_number(&mut self, row: u32, col: u32, number: f64) -> Result<()> {
        self.set_value(row, col, CellValue::Number(number))
    }

    fn set_date(&mut self, row: u32, col: u32, date: NaiveDateTime) -> Result<()> {
        self.set_value(row, col, CellValue::DateTime(date))
    }

    fn set_boolean(&mut self, row: u32, col: u32, value: bool) -> Result<()> {
        self.set_value(row, col, CellValue::Boolean(value))
    }

    /// Write `values` into `row` starting at column 0
    fn set_row(&mut self, row: u32, values: &[CellValue]) -> Result<()> {
        self.set_row_at(row, 0, values, None)
    }

    /// Write `values` into `row` starting at column `offset`, each with `format`
    ///
    /// Stops at the first failing cell; cells written before it stay written.
    fn set_row_at(
        &mut self,
        row: u32,
        offset: u32,
        values: &[CellValue],
        format: Option<&CellFormat>,
    ) -> Result<()> {
        self.check_editable()?;
        for (i, value) in values.iter().enumerate() {
            // Columns past u32::MAX saturate; no backend grid reaches that far
            let col = u32::try_from(i)
                .ok()
                .and_then(|i| offset.checked_add(i))
                .unwrap_or(u32::MAX);
            self.set_value_with_format(row, col, value.clone(), format)?;
        }
        Ok(())
    }

    /// Add `delta` to the number in a cell (empty counts as 0)
    ///
    /// Does nothing when `delta` is `None`.
    fn add_to_number(&mut self, row: u32, col: u32, delta: Option<f64>) -> Result<()> {
        let Some(delta) = delta else {
            return Ok(());
        };
        self.check_editable()?;
        let current = self.number(row, col)?.unwrap_or(0.0);
        self.set_number(row, col, current + delta)
    }

    /// Fit every column to its content
    fn auto_size_all(&mut self) -> Result<()> {
        let count = self.column_count()?;
        self.auto_size(0, count)
    }
}

/// Check a name for a new sheet against the naming rules and `existing` names
///
/// Names must be 1 to 31 characters long, must not contain any of
/// `: \ / ? * [ ]`, and must differ case-insensitively from every existing name.
pub fn validate_sheet_name<S: AsRef<str>>(name: &str, existing: &[S]) -> Result<()> {
    let invalid = |reason: String| Error::InvalidSheetName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(invalid(format!(
            "sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
    if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(invalid(format!("sheet name cannot contain '{}'", c)));
    }

    let name_lower = name.to_lowercase();
    if existing
        .iter()
        .any(|n| n.as_ref().to_lowercase() == name_lower)
    {
        return Err(Error::DuplicateSheetName(name.into()));
    }

    Ok(())
}
