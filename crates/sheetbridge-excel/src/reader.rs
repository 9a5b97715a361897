//! Loading `.xls` and `.xlsx` files through calamine

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use log::debug;
use sheetbridge_core::{Backend, Error, Result};

use crate::book::{ExcelBook, ExcelCell, ExcelGrid};

/// Read every sheet of `path`, values and formulas
pub fn read_book(path: &Path) -> Result<ExcelBook> {
    let load_err = |e: calamine::Error| Error::backend(Backend::Excel, path, e);

    let mut workbook = open_workbook_auto(path).map_err(load_err)?;
    let mut book = ExcelBook::default();

    for name in workbook.sheet_names() {
        let values = workbook.worksheet_range(&name).map_err(load_err)?;
        let formulas = workbook.worksheet_formula(&name).map_err(load_err)?;

        let mut grid = ExcelGrid::new(name);
        let (row0, col0) = values.start().unwrap_or((0, 0));
        for (r, c, data) in values.used_cells() {
            grid.cells.insert(
                (row0 + r as u32, col0 + c as u32),
                ExcelCell::new(data.clone()),
            );
        }

        let (row0, col0) = formulas.start().unwrap_or((0, 0));
        for (r, c, formula) in formulas.used_cells() {
            grid.cells
                .entry((row0 + r as u32, col0 + c as u32))
                .or_insert_with(|| ExcelCell::new(calamine::Data::Empty))
                .formula = Some(formula.clone());
        }

        debug!(
            "loaded sheet '{}' from {}: {} rows, {} cells",
            grid.name,
            path.display(),
            grid.rows(),
            grid.cells.len()
        );
        book.sheets.push(grid);
    }

    Ok(book)
}
