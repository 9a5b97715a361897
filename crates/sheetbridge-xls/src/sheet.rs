//! Sheet view over an [`XlsBook`]

use sheetbridge_core::{
    Backend, CellFormat, CellValue, DocumentRef, Error, Result, Sheet, XLS_MAX_COLS, XLS_MAX_ROWS,
};

use crate::book::{XlsBook, XlsCell, XlsGrid, XlsRecord};

/// Minimum width given to an auto-sized column, in 1/256 of a character
const MIN_COLUMN_WIDTH: u16 = 8 * 256;

/// A sheet of a legacy workbook
#[derive(Debug)]
pub struct XlsSheet {
    book: DocumentRef<XlsBook>,
    index: usize,
    name: String,
    editable: bool,
}

impl XlsSheet {
    pub(crate) fn new(book: DocumentRef<XlsBook>, index: usize, name: String, editable: bool) -> Self {
        Self {
            book,
            index,
            name,
            editable,
        }
    }

    fn with_grid<R>(&self, f: impl FnOnce(&XlsGrid) -> Result<R>) -> Result<R> {
        self.book.with(|book| {
            let grid = book.sheets.get(self.index).ok_or(Error::Closed)?;
            f(grid)
        })
    }

    fn with_book_mut<R>(&self, f: impl FnOnce(&mut XlsBook) -> Result<R>) -> Result<R> {
        self.book.with_mut(f)
    }

    /// Format of a cell, `None` for cells without a record
    pub fn format(&self, row: u32, col: u32) -> Result<Option<CellFormat>> {
        self.book.with(|book| {
            let grid = book.sheets.get(self.index).ok_or(Error::Closed)?;
            Ok(grid
                .cell(row, col)
                .and_then(|cell| book.styles.resolve(cell.xf)))
        })
    }

    /// Formula of a cell, if it holds one
    pub fn formula(&self, row: u32, col: u32) -> Result<Option<String>> {
        self.with_grid(|grid| Ok(grid.cell(row, col).and_then(|c| c.formula.clone())))
    }

    /// Whether a column was hidden
    pub fn is_column_hidden(&self, col: u32) -> Result<bool> {
        self.with_grid(|grid| Ok(grid.hidden_columns.contains(&col)))
    }

    /// Width of a column set by auto-sizing, in 1/256 of a character
    pub fn column_width(&self, col: u32) -> Result<Option<u16>> {
        self.with_grid(|grid| Ok(grid.column_widths.get(&col).copied()))
    }
}

fn check_bounds(row: u32, col: u32) -> Result<()> {
    if row >= XLS_MAX_ROWS || col >= XLS_MAX_COLS {
        return Err(Error::CellOutOfBounds {
            row,
            col,
            backend: Backend::Xls,
            max_rows: XLS_MAX_ROWS,
            max_cols: XLS_MAX_COLS,
        });
    }
    Ok(())
}

/// Generic value of a record
fn record_value(record: &XlsRecord, row: u32, col: u32) -> Result<CellValue> {
    match record {
        XlsRecord::Blank => Ok(CellValue::Empty),
        XlsRecord::Label(s) => Ok(CellValue::Text(s.clone())),
        XlsRecord::Number(n) => Ok(CellValue::Number(*n)),
        XlsRecord::Boolean(b) => Ok(CellValue::Boolean(*b)),
        XlsRecord::Date(dt) => Ok(CellValue::DateTime(*dt)),
        XlsRecord::Error(_) => Err(Error::UnhandledCellType {
            native: record.type_name().to_string(),
            row,
            col,
        }),
    }
}

/// Display contents of a record
fn record_contents(record: &XlsRecord) -> String {
    match record {
        XlsRecord::Blank => String::new(),
        XlsRecord::Label(s) => s.clone(),
        XlsRecord::Error(code) => code.clone(),
        XlsRecord::Number(n) => CellValue::Number(*n).to_string(),
        XlsRecord::Boolean(b) => CellValue::Boolean(*b).to_string(),
        XlsRecord::Date(dt) => CellValue::DateTime(*dt).to_string(),
    }
}

fn value_record(value: CellValue) -> XlsRecord {
    match value {
        CellValue::Empty => XlsRecord::Blank,
        CellValue::Text(s) => XlsRecord::Label(s),
        CellValue::Number(n) => XlsRecord::Number(n),
        CellValue::Boolean(b) => XlsRecord::Boolean(b),
        CellValue::DateTime(dt) => XlsRecord::Date(dt),
    }
}

impl Sheet for XlsSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn backend(&self) -> Backend {
        Backend::Xls
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn row_count(&self) -> Result<u32> {
        self.with_grid(|grid| Ok(grid.rows()))
    }

    fn column_count(&self) -> Result<u32> {
        self.with_grid(|grid| Ok(grid.columns()))
    }

    fn last_populated_column(&self, row: u32) -> Result<u32> {
        self.with_grid(|grid| Ok(grid.row_len(row)))
    }

    /// Formula text for formula cells, record contents otherwise
    fn raw_text(&self, row: u32, col: u32) -> Result<String> {
        self.with_grid(|grid| {
            Ok(match grid.cell(row, col) {
                Some(XlsCell {
                    formula: Some(formula),
                    ..
                }) => formula.clone(),
                Some(cell) => record_contents(&cell.record),
                None => String::new(),
            })
        })
    }

    fn value(&self, row: u32, col: u32) -> Result<CellValue> {
        self.with_grid(|grid| match grid.cell(row, col) {
            Some(cell) => record_value(&cell.record, row, col),
            None => Ok(CellValue::Empty),
        })
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

        self.with_book_mut(|book| {
            let xf = format.map(|f| book.styles.intern(f));
            let grid = book.sheets.get_mut(self.index).ok_or(Error::Closed)?;
            let cell = grid
                .cells
                .entry((row, col))
                .or_insert_with(|| XlsCell::new(XlsRecord::Blank));
            cell.record = value_record(value);
            cell.formula = None;
            if let Some(xf) = xf {
                cell.xf = xf;
            }
            Ok(())
        })
    }

    fn auto_size(&mut self, from: u32, to: u32) -> Result<()> {
        self.check_editable()?;
        self.with_book_mut(|book| {
            let grid = book.sheets.get_mut(self.index).ok_or(Error::Closed)?;
            for col in from..to.min(XLS_MAX_COLS) {
                let chars = grid
                    .column_cells(col)
                    .map(|cell| record_contents(&cell.record).chars().count())
                    .max()
                    .unwrap_or(0);
                let width = ((chars as u32 + 1) * 256).clamp(MIN_COLUMN_WIDTH as u32, u16::MAX as u32);
                grid.column_widths.insert(col, width as u16);
            }
            Ok(())
        })
    }

    fn hide_column(&mut self, col: u32) -> Result<()> {
        self.check_editable()?;
        check_bounds(0, col)?;
        self.with_book_mut(|book| {
            let grid = book.sheets.get_mut(self.index).ok_or(Error::Closed)?;
            grid.hidden_columns.insert(col);
            Ok(())
        })
    }
}
