//! # sheetbridge-xls
//!
//! Legacy binary Excel (`.xls`, BIFF8) backend for sheetbridge.
//!
//! Files are read with calamine into an in-memory model that keeps the BIFF
//! notions of cell records and extended formats (XF). Everything can be read
//! and edited in memory; persisting `.xls` files is not available.

pub mod book;
pub mod reader;
pub mod sheet;
pub mod spreadsheet;
pub mod styles;

pub use sheet::XlsSheet;
pub use spreadsheet::XlsSpreadsheet;
