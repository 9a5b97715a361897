//! Legacy workbook adapter

use std::path::{Path, PathBuf};

use log::debug;
use sheetbridge_core::{
    validate_sheet_name, Backend, Document, Error, Mode, Result, Sheet, Spreadsheet,
};

use crate::book::{XlsBook, XlsGrid};
use crate::reader::read_book;
use crate::sheet::XlsSheet;

/// A `.xls` workbook, held in memory
///
/// EDIT reads the whole file up front and keeps working on that copy; the
/// file itself is never patched in place. No BIFF8 writer is available, so
/// [`write`](Spreadsheet::write) fails with [`Error::Unsupported`] in every
/// mode.
#[derive(Debug)]
pub struct XlsSpreadsheet {
    path: PathBuf,
    mode: Mode,
    book: Document<XlsBook>,
}

impl XlsSpreadsheet {
    /// Start a new, empty workbook bound to `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_book(path, Mode::Create, XlsBook::default()))
    }

    /// Load `path` for editing
    pub fn edit<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path.as_ref(), Mode::Edit)
    }

    /// Load `path` read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path.as_ref(), Mode::Open)
    }

    fn load(path: &Path, mode: Mode) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let book = read_book(path)?;
        debug!(
            "opened {} ({} mode, {} sheets)",
            path.display(),
            mode,
            book.sheets.len()
        );
        Ok(Self::from_book(path, mode, book))
    }

    pub(crate) fn from_book<P: AsRef<Path>>(path: P, mode: Mode, book: XlsBook) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            mode,
            book: Document::new(book),
        }
    }

    fn sheet_view(&self, index: usize, name: String) -> XlsSheet {
        XlsSheet::new(self.book.handle(), index, name, self.mode.is_editable())
    }

    /// Typed access to a sheet, for the backend-specific accessors
    pub fn xls_sheet(&self, name: &str) -> Result<XlsSheet> {
        let index = self
            .sheet_names()?
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        Ok(self.sheet_view(index, name.to_string()))
    }
}

impl Spreadsheet for XlsSpreadsheet {
    fn path(&self) -> &Path {
        &self.path
    }

    fn backend(&self) -> Backend {
        Backend::Xls
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn sheet_names(&self) -> Result<Vec<String>> {
        self.book.with(|book| Ok(book.sheet_names()))
    }

    fn sheet_at(&self, index: usize) -> Result<Box<dyn Sheet>> {
        let name = self.book.with(|book| {
            book.sheets
                .get(index)
                .map(|s| s.name.clone())
                .ok_or(Error::SheetIndexOutOfRange {
                    index,
                    count: book.sheets.len(),
                })
        })?;
        Ok(Box::new(self.sheet_view(index, name)))
    }

    fn add_sheet(&mut self, name: &str) -> Result<Box<dyn Sheet>> {
        self.check_editable()?;
        let index = self.book.with_mut(|book| {
            validate_sheet_name(name, &book.sheet_names())?;
            book.sheets.push(XlsGrid::new(name));
            Ok(book.sheets.len() - 1)
        })?;
        debug!("added sheet '{}' to {}", name, self.path.display());
        Ok(Box::new(self.sheet_view(index, name.to_string())))
    }

    fn write(&mut self) -> Result<()> {
        self.check_editable()?;
        if self.book.is_closed() {
            return Err(Error::Closed);
        }
        Err(Error::Unsupported {
            feature: "writing .xls files",
            backend: Backend::Xls,
        })
    }

    fn close(&mut self) -> Result<()> {
        if self.book.close() {
            debug!("closed {}", self.path.display());
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.book.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetbridge_core::{CellValue, ErrorKind};

    #[test]
    fn test_create_add_and_read_back() {
        let mut xls = XlsSpreadsheet::create("heroes.xls").unwrap();
        assert!(xls.sheet_names().unwrap().is_empty());

        let mut sheet = xls.add_sheet("Heroes").unwrap();
        sheet
            .set_row(0, &[CellValue::from("Hero"), CellValue::from("HP")])
            .unwrap();
        sheet
            .set_row(1, &[CellValue::from("Alfonse"), CellValue::from(18)])
            .unwrap();

        let again = xls.sheet("Heroes").unwrap();
        assert_eq!(again.text(1, 0).unwrap(), Some("Alfonse".to_string()));
        assert_eq!(again.number(1, 1).unwrap(), Some(18.0));
        assert_eq!(xls.sheet_names().unwrap(), vec!["Heroes".to_string()]);
    }

    #[test]
    fn test_write_is_unsupported() {
        let mut xls = XlsSpreadsheet::create("out.xls").unwrap();
        let err = xls.write().unwrap_err();
        assert!(matches!(err, Error::Unsupported { backend: Backend::Xls, .. }));
        assert_eq!(err.kind(), ErrorKind::State);
    }

    #[test]
    fn test_read_only_mode() {
        let mut book = XlsBook::default();
        book.sheets.push(XlsGrid::new("Data"));
        let mut xls = XlsSpreadsheet::from_book("data.xls", Mode::Open, book);

        assert!(matches!(xls.add_sheet("Other"), Err(Error::ReadOnly(_))));
        assert!(matches!(xls.write(), Err(Error::ReadOnly(_))));
        let mut sheet = xls.sheet("Data").unwrap();
        assert!(matches!(sheet.set_text(0, 0, "x"), Err(Error::ReadOnly(_))));
        assert!(matches!(sheet.hide_column(0), Err(Error::ReadOnly(_))));
        assert_eq!(xls.sheet_names().unwrap(), vec!["Data".to_string()]);
    }

    #[test]
    fn test_sheet_lookup_errors() {
        let mut xls = XlsSpreadsheet::create("book.xls").unwrap();
        xls.add_sheet("One").unwrap();

        let err = xls.sheet("DoesNotExist").err().expect("lookup should fail");
        assert!(err.to_string().contains("DoesNotExist"));
        assert_eq!(err.kind(), ErrorKind::Argument);

        let err = xls.sheet_at(3).err().expect("lookup should fail");
        assert_eq!(err.to_string(), "sheet index 3 is out of range 0..0");
    }

    #[test]
    fn test_duplicate_sheet_rejected() {
        let mut xls = XlsSpreadsheet::create("book.xls").unwrap();
        xls.add_sheet("One").unwrap();
        assert!(matches!(
            xls.add_sheet("ONE"),
            Err(Error::DuplicateSheetName(_))
        ));
        assert_eq!(xls.sheet_count().unwrap(), 1);
    }

    #[test]
    fn test_close_is_idempotent_and_invalidates_sheets() {
        let mut xls = XlsSpreadsheet::create("book.xls").unwrap();
        let sheet = xls.add_sheet("One").unwrap();
        xls.close().unwrap();
        xls.close().unwrap();

        assert!(xls.is_closed());
        assert!(matches!(sheet.row_count(), Err(Error::Closed)));
        assert!(matches!(xls.sheet_names(), Err(Error::Closed)));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = XlsSpreadsheet::open(dir.path().join("nope.xls")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_typed_sheet_access() {
        let mut xls = XlsSpreadsheet::create("book.xls").unwrap();
        xls.add_sheet("One").unwrap();
        assert_eq!(xls.xls_sheet("One").unwrap().name(), "One");
        assert!(xls.xls_sheet("Two").is_err());
    }
}
