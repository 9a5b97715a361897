//! Excel workbook adapter

use std::path::{Path, PathBuf};

use log::debug;
use sheetbridge_core::{
    validate_sheet_name, Backend, Document, Error, Mode, Result, Sheet, Spreadsheet,
    XLSX_EXTENSION, XLSX_MAX_COLS, XLSX_MAX_ROWS, XLS_EXTENSION, XLS_MAX_COLS, XLS_MAX_ROWS,
};

use crate::book::{ExcelBook, ExcelGrid};
use crate::reader::read_book;
use crate::sheet::{ExcelSheet, Limits};
use crate::writer::write_book;

/// An Excel workbook (`.xls` or `.xlsx`), held in memory
///
/// Reads both formats; [`write`](Spreadsheet::write) produces `.xlsx` files
/// only and fails with [`Error::Unsupported`] for a `.xls` target.
#[derive(Debug)]
pub struct ExcelSpreadsheet {
    path: PathBuf,
    mode: Mode,
    book: Document<ExcelBook>,
    limits: Limits,
}

impl ExcelSpreadsheet {
    /// Start a new workbook at `path`
    ///
    /// Fails with [`Error::AlreadyExists`] if the file is already there.
    /// Missing parent directories are created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        debug!("creating {}", path.display());
        Ok(Self::from_book(path, Mode::Create, ExcelBook::default()))
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

    fn from_book(path: &Path, mode: Mode, book: ExcelBook) -> Self {
        Self {
            path: path.to_path_buf(),
            mode,
            book: Document::new(book),
            limits: limits_for(path),
        }
    }

    fn sheet_view(&self, index: usize, name: String) -> ExcelSheet {
        ExcelSheet::new(
            self.book.handle(),
            index,
            name,
            self.mode.is_editable(),
            self.limits,
        )
    }

    /// Typed access to a sheet, for the backend-specific accessors
    pub fn excel_sheet(&self, name: &str) -> Result<ExcelSheet> {
        let index = self
            .sheet_names()?
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        Ok(self.sheet_view(index, name.to_string()))
    }
}

fn extension_is(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

fn limits_for(path: &Path) -> Limits {
    if extension_is(path, XLS_EXTENSION) {
        Limits {
            max_rows: XLS_MAX_ROWS,
            max_cols: XLS_MAX_COLS,
        }
    } else {
        Limits {
            max_rows: XLSX_MAX_ROWS,
            max_cols: XLSX_MAX_COLS,
        }
    }
}

impl Spreadsheet for ExcelSpreadsheet {
    fn path(&self) -> &Path {
        &self.path
    }

    fn backend(&self) -> Backend {
        Backend::Excel
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
            book.sheets.push(ExcelGrid::new(name));
            Ok(book.sheets.len() - 1)
        })?;
        debug!("added sheet '{}' to {}", name, self.path.display());
        Ok(Box::new(self.sheet_view(index, name.to_string())))
    }

    fn write(&mut self) -> Result<()> {
        self.check_editable()?;
        if !extension_is(&self.path, XLSX_EXTENSION) {
            return Err(Error::Unsupported {
                feature: "writing files other than .xlsx",
                backend: Backend::Excel,
            });
        }
        self.book.with(|book| write_book(book, &self.path))
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

    #[test]
    fn test_limits_follow_extension() {
        assert_eq!(limits_for(Path::new("a.XLS")).max_cols, XLS_MAX_COLS);
        assert_eq!(limits_for(Path::new("a.xlsx")).max_rows, XLSX_MAX_ROWS);
    }

    #[test]
    fn test_write_xls_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let mut excel = ExcelSpreadsheet::create(dir.path().join("legacy.xls")).unwrap();
        excel.add_sheet("One").unwrap();
        assert!(matches!(
            excel.write(),
            Err(Error::Unsupported {
                backend: Backend::Excel,
                ..
            })
        ));
        assert!(!dir.path().join("legacy.xls").exists());
    }

    #[test]
    fn test_create_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.xlsx");
        let mut excel = ExcelSpreadsheet::create(&path).unwrap();
        excel.add_sheet("One").unwrap();
        excel.write().unwrap();
        assert!(path.exists());
    }
}
