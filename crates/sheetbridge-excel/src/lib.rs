//! # sheetbridge-excel
//!
//! General Excel backend for sheetbridge.
//!
//! Both `.xls` and `.xlsx` files are loaded with calamine (values and
//! formulas). Edits happen in memory and are saved as `.xlsx` with
//! rust_xlsxwriter, formats included.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetbridge_core::{CellFormat, CellValue, Color, Sheet, Spreadsheet};
//! use sheetbridge_excel::ExcelSpreadsheet;
//!
//! let mut book = ExcelSpreadsheet::create("heroes.xlsx")?;
//! let mut sheet = book.add_sheet("Heroes")?;
//! let header = CellFormat::bold().with_background(Color::Green);
//! sheet.set_row_at(0, 0, &[CellValue::from("Hero"), CellValue::from("HP")], Some(&header))?;
//! book.write()?;
//! book.close()?;
//! # Ok::<(), sheetbridge_core::Error>(())
//! ```

pub mod book;
pub mod convert;
pub mod reader;
pub mod sheet;
pub mod spreadsheet;
pub mod writer;

pub use sheet::ExcelSheet;
pub use spreadsheet::ExcelSpreadsheet;
