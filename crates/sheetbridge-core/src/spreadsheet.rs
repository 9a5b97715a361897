//! The spreadsheet abstraction shared by all backends

use std::path::Path;

use crate::backend::{Backend, Mode};
use crate::error::{Error, Result};
use crate::sheet::Sheet;

/// A workbook file handled by one backend
///
/// Obtained from the facade in one of three [`Mode`]s. The native document is
/// held in memory until [`close`](Spreadsheet::close) is called or the value
/// is dropped; nothing reaches the disk before [`write`](Spreadsheet::write).
pub trait Spreadsheet {
    /// Backing file
    fn path(&self) -> &Path;

    /// Backend serving this spreadsheet
    fn backend(&self) -> Backend;

    /// Access mode
    fn mode(&self) -> Mode;

    /// Sheet names, in document order
    fn sheet_names(&self) -> Result<Vec<String>>;

    /// Sheet by 0-based position
    fn sheet_at(&self, index: usize) -> Result<Box<dyn Sheet>>;

    /// Append a new, empty sheet
    ///
    /// Names are checked with [`validate_sheet_name`](crate::validate_sheet_name);
    /// a name already in use (ignoring case) fails with
    /// [`Error::DuplicateSheetName`].
    fn add_sheet(&mut self, name: &str) -> Result<Box<dyn Sheet>>;

    /// Persist the in-memory document to [`path`](Spreadsheet::path)
    fn write(&mut self) -> Result<()>;

    /// Release the native document
    ///
    /// Does not write. Calling it again is a no-op. Sheets obtained earlier
    /// fail with [`Error::Closed`] afterwards.
    fn close(&mut self) -> Result<()>;

    /// Whether [`close`](Spreadsheet::close) has been called
    fn is_closed(&self) -> bool;

    /// Number of sheets
    fn sheet_count(&self) -> Result<usize> {
        Ok(self.sheet_names()?.len())
    }

    /// Sheet by name
    fn sheet(&self, name: &str) -> Result<Box<dyn Sheet>> {
        let index = self
            .sheet_names()?
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        self.sheet_at(index)
    }

    /// All sheets, in document order
    fn sheets(&self) -> Result<Vec<Box<dyn Sheet>>> {
        (0..self.sheet_count()?).map(|i| self.sheet_at(i)).collect()
    }

    /// Fail with [`Error::ReadOnly`] unless the spreadsheet accepts mutations
    fn check_editable(&self) -> Result<()> {
        if self.mode().is_editable() {
            Ok(())
        } else {
            Err(Error::ReadOnly(self.path().display().to_string()))
        }
    }
}
