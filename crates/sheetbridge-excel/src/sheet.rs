//! Sheet view over an [`ExcelBook`]

use calamine::Data;
use sheetbridge_core::{Backend, CellFormat, CellValue, DocumentRef, Error, Result, Sheet};

use crate::book::{ExcelBook, ExcelCell, ExcelGrid};
use crate::convert::{data_text, data_to_value, value_to_data};

/// Default column width, in characters
const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Row and column limits of the target format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_rows: u32,
    pub max_cols: u32,
}

/// A sheet of an Excel workbook
#[derive(Debug)]
pub struct ExcelSheet {
    book: DocumentRef<ExcelBook>,
    index: usize,
    name: String,
    editable: bool,
    limits: Limits,
}

impl ExcelSheet {
    pub(crate) fn new(
        book: DocumentRef<ExcelBook>,
        index: usize,
        name: String,
        editable: bool,
        limits: Limits,
    ) -> Self {
        Self {
            book,
            index,
            name,
            editable,
            limits,
        }
    }

    fn with_grid<R>(&self, f: impl FnOnce(&ExcelGrid) -> Result<R>) -> Result<R> {
        self.book.with(|book| f(book.sheets.get(self.index).ok_or(Error::Closed)?))
    }

    fn with_grid_mut<R>(&self, f: impl FnOnce(&mut ExcelGrid) -> Result<R>) -> Result<R> {
        self.book
            .with_mut(|book| f(book.sheets.get_mut(self.index).ok_or(Error::Closed)?))
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<()> {
        if row >= self.limits.max_rows || col >= self.limits.max_cols {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                backend: Backend::Excel,
                max_rows: self.limits.max_rows,
                max_cols: self.limits.max_cols,
            });
        }
        Ok(())
    }

    /// Format applied to a cell during this session
    pub fn format(&self, row: u32, col: u32) -> Result<Option<CellFormat>> {
        self.with_grid(|grid| Ok(grid.cell(row, col).and_then(|c| c.format.clone())))
    }

    /// Whether a column was hidden
    pub fn is_column_hidden(&self, col: u32) -> Result<bool> {
        self.with_grid(|grid| Ok(grid.hidden_columns.contains(&col)))
    }

    /// Width set by auto-sizing, in characters
    pub fn column_width(&self, col: u32) -> Result<Option<f64>> {
        self.with_grid(|grid| Ok(grid.column_widths.get(&col).copied()))
    }
}

impl Sheet for ExcelSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn backend(&self) -> Backend {
        Backend::Excel
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
        self.with_grid(|grid| Ok(grid.last_cell_num(row)))
    }

    /// Formula text for formula cells, formatted value otherwise
    fn raw_text(&self, row: u32, col: u32) -> Result<String> {
        self.with_grid(|grid| {
            Ok(match grid.cell(row, col) {
                Some(ExcelCell {
                    formula: Some(formula),
                    ..
                }) => formula.clone(),
                Some(cell) => data_text(&cell.data),
                None => String::new(),
            })
        })
    }

    /// Stored value; formulas give their last computed result
    fn value(&self, row: u32, col: u32) -> Result<CellValue> {
        self.with_grid(|grid| match grid.cell(row, col) {
            Some(cell) => data_to_value(&cell.data, row, col),
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
        self.check_bounds(row, col)?;

        self.with_grid_mut(|grid| {
            let cell = grid
                .cells
                .entry((row, col))
                .or_insert_with(|| ExcelCell::new(Data::Empty));
            cell.data = value_to_data(value);
            cell.formula = None;
            if let Some(format) = format {
                cell.format = Some(format.clone());
            }
            Ok(())
        })
    }

    fn auto_size(&mut self, from: u32, to: u32) -> Result<()> {
        self.check_editable()?;
        let to = to.min(self.limits.max_cols);
        self.with_grid_mut(|grid| {
            for col in from..to {
                let chars = grid
                    .cells
                    .iter()
                    .filter(|((_, c), _)| *c == col)
                    .map(|(_, cell)| data_text(&cell.data).chars().count())
                    .max()
                    .unwrap_or(0);
                let width = (chars as f64 + 1.0).max(DEFAULT_COLUMN_WIDTH);
                grid.column_widths.insert(col, width);
            }
            Ok(())
        })
    }

    fn hide_column(&mut self, col: u32) -> Result<()> {
        self.check_editable()?;
        self.check_bounds(0, col)?;
        self.with_grid_mut(|grid| {
            grid.hidden_columns.insert(col);
            Ok(())
        })
    }
}
