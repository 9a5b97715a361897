//! Saving workbooks as `.xlsx` through rust_xlsxwriter

use std::collections::HashMap;
use std::path::Path;

use calamine::Data;
use log::{info, warn};
use rust_xlsxwriter::{
    Color as XlsxColor, Format, FormatPattern, Formula, Workbook, Worksheet, XlsxError,
};
use sheetbridge_core::{parse_iso_datetime, Backend, CellFormat, Error, Result, DATE_NUMBER_FORMAT};

use crate::book::{ExcelBook, ExcelCell, ExcelGrid};
use crate::convert::data_text;

/// Build the rust_xlsxwriter format for a [`CellFormat`]
pub fn xlsx_format(format: &CellFormat) -> Format {
    let mut xlsx = Format::new()
        .set_font_name(format.font.name.as_str())
        .set_font_size(format.font.size);
    if format.font.bold {
        xlsx = xlsx.set_bold();
    }
    if let Some(color) = format.background {
        xlsx = xlsx
            .set_background_color(XlsxColor::RGB(color.rgb()))
            .set_pattern(FormatPattern::Solid);
    }
    xlsx
}

/// Formats built so far, one per distinct [`CellFormat`]
#[derive(Default)]
struct FormatCache {
    formats: HashMap<CellFormat, Format>,
    default: Format,
}

impl FormatCache {
    fn get(&mut self, format: Option<&CellFormat>) -> &Format {
        match format {
            Some(f) => self
                .formats
                .entry(f.clone())
                .or_insert_with(|| xlsx_format(f)),
            None => &self.default,
        }
    }
}

/// Write `book` to `path`, replacing the file
pub fn write_book(book: &ExcelBook, path: &Path) -> Result<()> {
    let save_err = |e: XlsxError| Error::backend(Backend::Excel, path, e);

    let mut workbook = Workbook::new();
    let mut formats = FormatCache::default();

    for grid in &book.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(grid.name.as_str()).map_err(save_err)?;
        write_grid(worksheet, grid, &mut formats).map_err(save_err)?;
    }

    workbook.save(path).map_err(save_err)?;
    info!(
        "wrote {} ({} sheets)",
        path.display(),
        book.sheets.len()
    );
    Ok(())
}

fn write_grid(
    worksheet: &mut Worksheet,
    grid: &ExcelGrid,
    formats: &mut FormatCache,
) -> std::result::Result<(), XlsxError> {
    for (&(row, col), cell) in &grid.cells {
        let format = formats.get(cell.format.as_ref());
        write_cell(worksheet, row, col as u16, cell, format)?;
    }
    for (&col, &width) in &grid.column_widths {
        worksheet.set_column_width(col as u16, width)?;
    }
    for &col in &grid.hidden_columns {
        worksheet.set_column_hidden(col as u16)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ExcelCell,
    format: &Format,
) -> std::result::Result<(), XlsxError> {
    if let Some(formula) = &cell.formula {
        let formula = Formula::new(formula).set_result(formula_result(&cell.data));
        worksheet.write_formula_with_format(row, col, formula, format)?;
        return Ok(());
    }

    match &cell.data {
        Data::Empty => {
            worksheet.write_blank(row, col, format)?;
        }
        Data::String(s) => {
            worksheet.write_string_with_format(row, col, s.as_str(), format)?;
        }
        Data::Float(n) => {
            worksheet.write_number_with_format(row, col, *n, format)?;
        }
        Data::Int(i) => {
            worksheet.write_number_with_format(row, col, *i as f64, format)?;
        }
        Data::Bool(b) => {
            worksheet.write_boolean_with_format(row, col, *b, format)?;
        }
        Data::DateTime(dt) => match dt.as_datetime().filter(|_| !dt.is_duration()) {
            Some(datetime) => {
                let date_format = format.clone().set_num_format(DATE_NUMBER_FORMAT);
                worksheet.write_datetime_with_format(row, col, &datetime, &date_format)?;
            }
            None => {
                worksheet.write_number_with_format(row, col, dt.as_f64(), format)?;
            }
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(datetime) => {
                let date_format = format.clone().set_num_format(DATE_NUMBER_FORMAT);
                worksheet.write_datetime_with_format(row, col, &datetime, &date_format)?;
            }
            None => {
                worksheet.write_string_with_format(row, col, s.as_str(), format)?;
            }
        },
        Data::DurationIso(s) => {
            warn!("duration in cell [{row}, {col}] written as text");
            worksheet.write_string_with_format(row, col, s.as_str(), format)?;
        }
        Data::Error(e) => {
            warn!("error value {e} in cell [{row}, {col}] written as text");
            worksheet.write_string_with_format(row, col, e.to_string(), format)?;
        }
    }
    Ok(())
}

/// Cached result stored next to a formula, so readers that do not
/// recalculate still see the last computed value
fn formula_result(data: &Data) -> String {
    match data {
        Data::Float(n) => n.to_string(),
        Data::Int(i) => i.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        other => data_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetbridge_core::{Color, Font};

    #[test]
    fn test_format_cache_reuses_formats() {
        let mut cache = FormatCache::default();
        let bold = CellFormat::bold().with_background(Color::Green);
        cache.get(Some(&bold));
        cache.get(Some(&bold.clone()));
        cache.get(Some(&CellFormat::new(Font::calibri())));
        cache.get(None);
        assert_eq!(cache.formats.len(), 2);
    }

    #[test]
    fn test_formula_result_text() {
        use calamine::CellErrorType;

        assert_eq!(formula_result(&Data::Float(3.0)), "3");
        assert_eq!(formula_result(&Data::Float(0.1)), "0.1");
        assert_eq!(formula_result(&Data::Bool(true)), "TRUE");
        assert_eq!(formula_result(&Data::String("ok".into())), "ok");
        assert_eq!(formula_result(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
        assert_eq!(formula_result(&Data::Empty), "");
    }
}
