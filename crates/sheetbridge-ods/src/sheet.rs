//! Sheet view over an OpenDocument workbook

use sheetbridge_core::{
    Backend, CellFormat, CellValue, DocumentRef, Error, Result, Sheet, XLSX_MAX_COLS,
    XLSX_MAX_ROWS,
};
use spreadsheet_ods::{Value, WorkBook};

use crate::convert::{ods_text, ods_to_value, value_to_ods};
use crate::styles::StyleRegistry;

/// Workbook plus the styles registered for it during this session
#[derive(Debug)]
pub struct OdsDocument {
    pub book: WorkBook,
    pub styles: StyleRegistry,
}

impl OdsDocument {
    pub fn new(book: WorkBook) -> Self {
        Self {
            book,
            styles: StyleRegistry::default(),
        }
    }

    pub fn sheet_names(&self) -> Vec<String> {
        (0..self.book.num_sheets())
            .map(|i| self.book.sheet(i).name().to_string())
            .collect()
    }
}

/// A table of an OpenDocument spreadsheet
#[derive(Debug)]
pub struct OdsSheet {
    doc: DocumentRef<OdsDocument>,
    index: usize,
    name: String,
    editable: bool,
}

impl OdsSheet {
    pub(crate) fn new(doc: DocumentRef<OdsDocument>, index: usize, name: String, editable: bool) -> Self {
        Self {
            doc,
            index,
            name,
            editable,
        }
    }

    fn with_sheet<R>(&self, f: impl FnOnce(&spreadsheet_ods::Sheet) -> Result<R>) -> Result<R> {
        self.doc.with(|doc| {
            if self.index >= doc.book.num_sheets() {
                return Err(Error::Closed);
            }
            f(doc.book.sheet(self.index))
        })
    }

    /// Formula of a cell, if it holds one
    pub fn formula(&self, row: u32, col: u32) -> Result<Option<String>> {
        self.with_sheet(|sheet| Ok(sheet.formula(row, col).cloned()))
    }

    /// Name of the cell style applied to a cell
    pub fn style_name(&self, row: u32, col: u32) -> Result<Option<String>> {
        self.with_sheet(|sheet| Ok(sheet.cellstyle(row, col).map(|s| s.as_str().to_string())))
    }
}

/// Same grid limits as xlsx, which is what office suites enforce for ods
fn check_bounds(row: u32, col: u32) -> Result<()> {
    if row >= XLSX_MAX_ROWS || col >= XLSX_MAX_COLS {
        return Err(Error::CellOutOfBounds {
            row,
            col,
            backend: Backend::Ods,
            max_rows: XLSX_MAX_ROWS,
            max_cols: XLSX_MAX_COLS,
        });
    }
    Ok(())
}

impl Sheet for OdsSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn backend(&self) -> Backend {
        Backend::Ods
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn row_count(&self) -> Result<u32> {
        self.with_sheet(|sheet| Ok(sheet.used_grid_size().0))
    }

    fn column_count(&self) -> Result<u32> {
        self.with_sheet(|sheet| Ok(sheet.used_grid_size().1))
    }

    /// Scans right to left for the last cell holding a value
    fn last_populated_column(&self, row: u32) -> Result<u32> {
        self.with_sheet(|sheet| {
            let mut col = sheet.used_grid_size().1;
            while col > 0 {
                if !matches!(sheet.value(row, col - 1), Value::Empty) {
                    return Ok(col);
                }
                col -= 1;
            }
            Ok(0)
        })
    }

    /// Formula if present, displayed text otherwise
    fn raw_text(&self, row: u32, col: u32) -> Result<String> {
        self.with_sheet(|sheet| match sheet.formula(row, col) {
            Some(formula) => Ok(formula.clone()),
            None => Ok(ods_text(sheet.value(row, col))),
        })
    }

    fn value(&self, row: u32, col: u32) -> Result<CellValue> {
        self.with_sheet(|sheet| ods_to_value(sheet.value(row, col), row, col))
    }

    fn set_value_with_format(
        &mut self,
        row: u32,
        col: u32,
        value: CellValue,
        format: Option<&CellFormat>,
    ) -> Result<()> {
        self.check_editable()?;
        if value.is_empty() {
            return Ok(());
        }
        check_bounds(row, col)?;

        self.doc.with_mut(|doc| {
            if self.index >= doc.book.num_sheets() {
                return Err(Error::Closed);
            }
            let style = format.map(|f| doc.styles.style_for(&mut doc.book, f));
            let sheet = doc.book.sheet_mut(self.index);
            sheet.clear_formula(row, col);
            match style {
                Some(style) => sheet.set_styled_value(row, col, value_to_ods(value), &style),
                None => sheet.set_value(row, col, value_to_ods(value)),
            }
            Ok(())
        })
    }

    fn auto_size(&mut self, _from: u32, _to: u32) -> Result<()> {
        self.check_editable()?;
        Err(Error::Unsupported {
            feature: "auto-sizing columns",
            backend: Backend::Ods,
        })
    }

    fn hide_column(&mut self, _col: u32) -> Result<()> {
        self.check_editable()?;
        Err(Error::Unsupported {
            feature: "hiding columns",
            backend: Backend::Ods,
        })
    }
}
