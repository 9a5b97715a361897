//! # sheetbridge-ods
//!
//! OpenDocument spreadsheet (`.ods`) backend for sheetbridge, built on
//! spreadsheet-ods. The whole document is read into memory; cell formats
//! become automatic cell styles.

pub mod convert;
pub mod sheet;
pub mod spreadsheet;
pub mod styles;

pub use sheet::OdsSheet;
pub use spreadsheet::OdsSpreadsheet;
