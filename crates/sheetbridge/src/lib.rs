//! # sheetbridge
//!
//! One spreadsheet API over three spreadsheet libraries.
//!
//! A file is served by one of three backends:
//!
//! - [`Backend::Xls`] - legacy binary Excel only (`.xls`)
//! - [`Backend::Excel`] - general Excel backend (`.xls` read, `.xlsx` read and write)
//! - [`Backend::Ods`] - OpenDocument spreadsheets (`.ods`)
//!
//! The backend is either given explicitly (the `*_with` constructors, which
//! check that it can handle the file's extension) or detected from the
//! extension. Every backend is reached through the same [`Spreadsheet`] and
//! [`Sheet`] traits, so code written against them runs unchanged on any
//! supported file.
//!
//! ## Example
//!
//! ```no_run
//! use sheetbridge::prelude::*;
//!
//! let mut book = sheetbridge::create("heroes.xlsx")?;
//! let mut sheet = book.add_sheet("Heroes")?;
//! let header = CellFormat::bold().with_background(Color::Green);
//! let titles = [CellValue::from("Hero"), CellValue::from("HP")];
//! sheet.set_row_at(0, 0, &titles, Some(&header))?;
//! sheet.set_row(1, &[CellValue::from("Alfonse"), CellValue::from(18.0)])?;
//! book.write()?;
//! book.close()?;
//!
//! let book = sheetbridge::open("heroes.xlsx")?;
//! assert_eq!(book.sheet("Heroes")?.number(1, 1)?, Some(18.0));
//! # Ok::<(), sheetbridge::Error>(())
//! ```
//!
//! ## Features
//!
//! Each backend sits behind a cargo feature (`xls`, `excel`, `ods`, all on
//! by default). A disabled backend is still detected and validated, but
//! constructing a spreadsheet with it fails with [`Error::Unsupported`].

pub mod prelude;

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;

pub use sheetbridge_core::{
    column_index, column_label, parse_iso_datetime, validate_sheet_name, Backend, CellFormat,
    CellKind, CellValue, Color, Document, DocumentRef, Error, ErrorKind, Font, Mode, Result,
    Sheet, Spreadsheet, DATE_NUMBER_FORMAT, DEFAULT_FONT_SIZE, MAX_SHEET_NAME_LEN,
    ODS_EXTENSION, SUPPORTED_EXTENSIONS, XLSX_EXTENSION, XLSX_MAX_COLS, XLSX_MAX_ROWS,
    XLS_EXTENSION, XLS_MAX_COLS, XLS_MAX_ROWS,
};

#[cfg(feature = "excel")]
pub use sheetbridge_excel::{ExcelSheet, ExcelSpreadsheet};
#[cfg(feature = "ods")]
pub use sheetbridge_ods::{OdsSheet, OdsSpreadsheet};
#[cfg(feature = "xls")]
pub use sheetbridge_xls::{XlsSheet, XlsSpreadsheet};

/// Extension of `path` without the dot, or `""` when it has none
pub fn file_extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

fn has_extension(path: &Path, extension: &str) -> bool {
    file_extension(path).eq_ignore_ascii_case(extension)
}

/// Whether `path` has the legacy Excel extension
pub fn is_xls(path: &Path) -> bool {
    has_extension(path, XLS_EXTENSION)
}

/// Whether `path` has the modern Excel extension
pub fn is_xlsx(path: &Path) -> bool {
    has_extension(path, XLSX_EXTENSION)
}

/// Whether `path` is a legacy or modern Excel file
pub fn is_excel_file(path: &Path) -> bool {
    is_xls(path) || is_xlsx(path)
}

/// Whether `path` has any supported spreadsheet extension
pub fn is_spreadsheet(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|e| has_extension(path, e))
}

/// Backend used for `path` when none is given
///
/// Both Excel extensions map to [`Backend::Excel`].
pub fn detect_backend(path: &Path) -> Result<Backend> {
    if is_excel_file(path) {
        Ok(Backend::Excel)
    } else if has_extension(path, ODS_EXTENSION) {
        Ok(Backend::Ods)
    } else {
        Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: file_extension(path).to_string(),
        })
    }
}

/// Backends able to handle `path`, empty for unsupported extensions
pub fn admitted_backends(path: &Path) -> BTreeSet<Backend> {
    let extension = file_extension(path);
    Backend::ALL
        .into_iter()
        .filter(|b| b.handles(extension))
        .collect()
}

/// Check that `backend` can handle `path`
pub fn validate_backend(path: &Path, backend: Backend) -> Result<()> {
    let admitted = admitted_backends(path);
    if admitted.contains(&backend) {
        return Ok(());
    }
    let reason = if admitted.is_empty() {
        format!(
            "please specify a file with one of the following extensions: {}",
            SUPPORTED_EXTENSIONS.join(", ")
        )
    } else {
        let names: Vec<&str> = admitted.iter().map(Backend::name).collect();
        format!("please use one of these backends: {}", names.join(", "))
    };
    Err(Error::BackendNotAdmitted {
        path: path.to_path_buf(),
        backend,
        reason,
    })
}

/// New spreadsheet at `path`, backend detected from the extension
///
/// Nothing is written until [`Spreadsheet::write`] is called.
pub fn create<P: AsRef<Path>>(path: P) -> Result<Box<dyn Spreadsheet>> {
    let path = path.as_ref();
    construct(path, detect_backend(path)?, Mode::Create)
}

/// New spreadsheet at `path` using `backend`
pub fn create_with<P: AsRef<Path>>(path: P, backend: Backend) -> Result<Box<dyn Spreadsheet>> {
    let path = path.as_ref();
    validate_backend(path, backend)?;
    construct(path, backend, Mode::Create)
}

/// Existing spreadsheet at `path`, opened for modification
pub fn edit<P: AsRef<Path>>(path: P) -> Result<Box<dyn Spreadsheet>> {
    let path = path.as_ref();
    construct(path, detect_backend(path)?, Mode::Edit)
}

pub fn edit_with<P: AsRef<Path>>(path: P, backend: Backend) -> Result<Box<dyn Spreadsheet>> {
    let path = path.as_ref();
    validate_backend(path, backend)?;
    construct(path, backend, Mode::Edit)
}

/// Existing spreadsheet at `path`, read-only
pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn Spreadsheet>> {
    let path = path.as_ref();
    construct(path, detect_backend(path)?, Mode::Open)
}

pub fn open_with<P: AsRef<Path>>(path: P, backend: Backend) -> Result<Box<dyn Spreadsheet>> {
    let path = path.as_ref();
    validate_backend(path, backend)?;
    construct(path, backend, Mode::Open)
}

fn construct(path: &Path, backend: Backend, mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    if mode == Mode::Open && !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    debug!("{} {} with the {} backend", mode, path.display(), backend);
    match backend {
        Backend::Xls => construct_xls(path, mode),
        Backend::Excel => construct_excel(path, mode),
        Backend::Ods => construct_ods(path, mode),
    }
}

#[cfg(feature = "xls")]
fn construct_xls(path: &Path, mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    Ok(Box::new(match mode {
        Mode::Create => XlsSpreadsheet::create(path)?,
        Mode::Edit => XlsSpreadsheet::edit(path)?,
        Mode::Open => XlsSpreadsheet::open(path)?,
    }))
}

#[cfg(not(feature = "xls"))]
fn construct_xls(_path: &Path, _mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    Err(disabled(Backend::Xls))
}

#[cfg(feature = "excel")]
fn construct_excel(path: &Path, mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    Ok(Box::new(match mode {
        Mode::Create => ExcelSpreadsheet::create(path)?,
        Mode::Edit => ExcelSpreadsheet::edit(path)?,
        Mode::Open => ExcelSpreadsheet::open(path)?,
    }))
}

#[cfg(not(feature = "excel"))]
fn construct_excel(_path: &Path, _mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    Err(disabled(Backend::Excel))
}

#[cfg(feature = "ods")]
fn construct_ods(path: &Path, mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    Ok(Box::new(match mode {
        Mode::Create => OdsSpreadsheet::create(path)?,
        Mode::Edit => OdsSpreadsheet::edit(path)?,
        Mode::Open => OdsSpreadsheet::open(path)?,
    }))
}

#[cfg(not(feature = "ods"))]
fn construct_ods(_path: &Path, _mode: Mode) -> Result<Box<dyn Spreadsheet>> {
    Err(disabled(Backend::Ods))
}

#[cfg(not(all(feature = "xls", feature = "excel", feature = "ods")))]
fn disabled(backend: Backend) -> Error {
    Error::Unsupported {
        feature: "support in this build",
        backend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_detect_backend() {
        assert_eq!(detect_backend(Path::new("a.xls")).unwrap(), Backend::Excel);
        assert_eq!(detect_backend(Path::new("a.XLSX")).unwrap(), Backend::Excel);
        assert_eq!(detect_backend(Path::new("dir/a.ods")).unwrap(), Backend::Ods);

        let err = detect_backend(Path::new("a.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        let msg = err.to_string();
        assert!(msg.contains("'csv'"));
        assert!(msg.contains("xls, xlsx or ods"));
    }

    #[test]
    fn test_admitted_backends() {
        let xls: Vec<_> = admitted_backends(Path::new("a.xls")).into_iter().collect();
        assert_eq!(xls, vec![Backend::Xls, Backend::Excel]);
        let xlsx: Vec<_> = admitted_backends(Path::new("a.xlsx")).into_iter().collect();
        assert_eq!(xlsx, vec![Backend::Excel]);
        let ods: Vec<_> = admitted_backends(Path::new("a.Ods")).into_iter().collect();
        assert_eq!(ods, vec![Backend::Ods]);
        assert!(admitted_backends(Path::new("a.txt")).is_empty());
        assert!(admitted_backends(Path::new("noext")).is_empty());
    }

    #[test]
    fn test_validate_backend_messages() {
        assert!(validate_backend(Path::new("a.xls"), Backend::Xls).is_ok());

        let err = validate_backend(Path::new("a.xlsx"), Backend::Xls).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
        assert!(err.to_string().contains("please use one of these backends: excel"));

        let err = validate_backend(Path::new("a.doc"), Backend::Ods).unwrap_err();
        assert!(err.to_string().contains("xls, xlsx, ods"));
    }

    #[test]
    fn test_extension_predicates() {
        assert!(is_spreadsheet(Path::new("a.XLS")));
        assert!(is_spreadsheet(Path::new("a.ods")));
        assert!(!is_spreadsheet(Path::new("a.csv")));
        assert!(is_excel_file(Path::new("a.xlsx")));
        assert!(!is_excel_file(Path::new("a.ods")));
        assert!(is_xls(Path::new("a.Xls")));
        assert!(!is_xlsx(Path::new("a.xls")));
        assert_eq!(file_extension(&PathBuf::from("dir.d/book")), "");
        assert_eq!(file_extension(Path::new("book.tar.ods")), "ods");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["missing.xls", "missing.xlsx", "missing.ods"] {
            let path = dir.path().join(name);
            assert!(matches!(open(&path), Err(Error::NotFound(_))));
        }
        assert!(matches!(
            open(dir.path().join("missing.csv")),
            Err(Error::UnsupportedFormat { .. })
        ));
    }
}
