//! Prelude module - common imports for sheetbridge users
//!
//! ```rust
//! use sheetbridge::prelude::*;
//! ```

pub use crate::{
    Backend, CellFormat, CellKind, CellValue, Color, Error, ErrorKind, Font, Mode, Result, Sheet,
    Spreadsheet,
};
