//! Loading `.xls` files through calamine

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xls, XlsError};
use log::{debug, warn};
use sheetbridge_core::{parse_iso_datetime, Backend, Error, Result};

use crate::book::{XlsBook, XlsCell, XlsGrid, XlsRecord};

/// Read every sheet of a `.xls` file into memory
pub fn read_book(path: &Path) -> Result<XlsBook> {
    let load_err = |e: XlsError| Error::backend(Backend::Xls, path, e);

    let mut workbook: Xls<_> = open_workbook(path).map_err(load_err)?;
    let mut book = XlsBook::default();

    for name in workbook.sheet_names() {
        let values = workbook.worksheet_range(&name).map_err(load_err)?;
        let formulas = workbook.worksheet_formula(&name).map_err(load_err)?;

        let mut grid = XlsGrid::new(name);
        if let Some((row0, col0)) = values.start() {
            for (r, c, data) in values.used_cells() {
                let (row, col) = (row0 + r as u32, col0 + c as u32);
                grid.cells
                    .insert((row, col), XlsCell::new(record_from_data(data, row, col)));
            }
        }
        if let Some((row0, col0)) = formulas.start() {
            for (r, c, formula) in formulas.used_cells() {
                let key = (row0 + r as u32, col0 + c as u32);
                grid.cells
                    .entry(key)
                    .or_insert_with(|| XlsCell::new(XlsRecord::Blank))
                    .formula = Some(formula.clone());
            }
        }

        debug!(
            "loaded sheet '{}' from {}: {} cells",
            grid.name,
            path.display(),
            grid.cells.len()
        );
        book.sheets.push(grid);
    }

    Ok(book)
}

/// Map a calamine value onto the BIFF record that would have stored it
fn record_from_data(data: &Data, row: u32, col: u32) -> XlsRecord {
    match data {
        Data::Empty => XlsRecord::Blank,
        Data::String(s) => XlsRecord::Label(s.clone()),
        Data::Float(f) => XlsRecord::Number(*f),
        Data::Int(i) => XlsRecord::Number(*i as f64),
        Data::Bool(b) => XlsRecord::Boolean(*b),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                warn!("duration in cell [{row}, {col}] read as a plain number");
                return XlsRecord::Number(dt.as_f64());
            }
            match dt.as_datetime() {
                Some(datetime) => XlsRecord::Date(datetime),
                None => XlsRecord::Number(dt.as_f64()),
            }
        }
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(XlsRecord::Date)
            .unwrap_or_else(|| XlsRecord::Label(s.clone())),
        Data::DurationIso(s) => {
            warn!("duration in cell [{row}, {col}] read as text");
            XlsRecord::Label(s.clone())
        }
        Data::Error(e) => XlsRecord::Error(e.to_string()),
    }
}
