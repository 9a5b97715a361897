//! OpenDocument spreadsheet adapter

use std::path::{Path, PathBuf};

use log::{debug, info};
use sheetbridge_core::{
    validate_sheet_name, Backend, Document, Error, Mode, Result, Sheet, Spreadsheet,
};
use spreadsheet_ods::{read_ods, write_ods, WorkBook};

use crate::sheet::{OdsDocument, OdsSheet};

/// An `.ods` document, held in memory
///
/// CREATE does not touch the disk and starts without tables. An existing
/// file at the target path is replaced on [`write`](Spreadsheet::write).
#[derive(Debug)]
pub struct OdsSpreadsheet {
    path: PathBuf,
    mode: Mode,
    doc: Document<OdsDocument>,
}

impl OdsSpreadsheet {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_book(path.as_ref(), Mode::Create, WorkBook::new_empty()))
    }

    pub fn edit<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path.as_ref(), Mode::Edit)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path.as_ref(), Mode::Open)
    }

    fn load(path: &Path, mode: Mode) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let book = read_ods(path).map_err(|e| Error::backend(Backend::Ods, path, e))?;
        debug!(
            "opened {} ({} mode, {} sheets)",
            path.display(),
            mode,
            book.num_sheets()
        );
        Ok(Self::from_book(path, mode, book))
    }

    fn from_book(path: &Path, mode: Mode, book: WorkBook) -> Self {
        Self {
            path: path.to_path_buf(),
            mode,
            doc: Document::new(OdsDocument::new(book)),
        }
    }

    fn sheet_view(&self, index: usize, name: String) -> OdsSheet {
        OdsSheet::new(self.doc.handle(), index, name, self.mode.is_editable())
    }

    /// Typed access to a sheet, for the backend-specific accessors
    pub fn ods_sheet(&self, name: &str) -> Result<OdsSheet> {
        let index = self
            .sheet_names()?
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        Ok(self.sheet_view(index, name.to_string()))
    }
}

impl Spreadsheet for OdsSpreadsheet {
    fn path(&self) -> &Path {
        &self.path
    }

    fn backend(&self) -> Backend {
        Backend::Ods
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn sheet_names(&self) -> Result<Vec<String>> {
        self.doc.with(|doc| Ok(doc.sheet_names()))
    }

    fn sheet_at(&self, index: usize) -> Result<Box<dyn Sheet>> {
        let name = self.doc.with(|doc| {
            let count = doc.book.num_sheets();
            if index >= count {
                return Err(Error::SheetIndexOutOfRange { index, count });
            }
            Ok(doc.book.sheet(index).name().to_string())
        })?;
        Ok(Box::new(self.sheet_view(index, name)))
    }

    fn add_sheet(&mut self, name: &str) -> Result<Box<dyn Sheet>> {
        self.check_editable()?;
        let index = self.doc.with_mut(|doc| {
            validate_sheet_name(name, &doc.sheet_names())?;
            doc.book.push_sheet(spreadsheet_ods::Sheet::new(name));
            Ok(doc.book.num_sheets() - 1)
        })?;
        debug!("added sheet '{}' to {}", name, self.path.display());
        Ok(Box::new(self.sheet_view(index, name.to_string())))
    }

    fn write(&mut self) -> Result<()> {
        self.check_editable()?;
        let path = self.path.clone();
        self.doc.with_mut(|doc| {
            write_ods(&mut doc.book, &path).map_err(|e| Error::backend(Backend::Ods, &path, e))?;
            info!("wrote {} ({} sheets)", path.display(), doc.book.num_sheets());
            Ok(())
        })
    }

    fn close(&mut self) -> Result<()> {
        if self.doc.close() {
            debug!("closed {}", self.path.display());
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.doc.is_closed()
    }
}
