//! # sheetbridge-core
//!
//! Core types shared by the sheetbridge backends.
//!
//! This crate provides the backend-independent surface:
//! - [`Spreadsheet`] and [`Sheet`] - the traits every backend adapter implements
//! - [`CellValue`] - generic cell values (text, number, boolean, date/time)
//! - [`CellFormat`], [`Font`], [`Color`] - display formats applied at write time
//! - [`Backend`] and [`Mode`] - which library serves a file, and how it was opened
//! - [`Document`] - the in-memory document handle that keeps sheet views honest
//!   after their spreadsheet is closed
//!
//! Backend crates depend on this one; applications normally go through the
//! `sheetbridge` facade crate instead.

pub mod backend;
pub mod column;
pub mod document;
pub mod error;
pub mod sheet;
pub mod spreadsheet;
pub mod style;
pub mod value;

pub use backend::{Backend, Mode, ODS_EXTENSION, SUPPORTED_EXTENSIONS, XLSX_EXTENSION, XLS_EXTENSION};
pub use column::{column_index, column_label};
pub use document::{Document, DocumentRef};
pub use error::{Error, ErrorKind, Result};
pub use sheet::{validate_sheet_name, Sheet};
pub use spreadsheet::Spreadsheet;
pub use style::{CellFormat, Color, Font, DEFAULT_FONT_SIZE};
pub use value::{parse_iso_datetime, CellKind, CellValue};

/// Maximum number of rows in a legacy `.xls` sheet
pub const XLS_MAX_ROWS: u32 = 65_536;

/// Maximum number of columns in a legacy `.xls` sheet
pub const XLS_MAX_COLS: u32 = 256;

/// Maximum number of rows in an `.xlsx` sheet
pub const XLSX_MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in an `.xlsx` sheet
pub const XLSX_MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Format used for date cells written by the Excel backends
pub const DATE_NUMBER_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
