//! Error types for sheetbridge

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::Backend;
use crate::value::CellKind;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// None of these are retried internally; the kind only tells the caller what
/// went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: unknown extension, missing sheet, bad column label, ...
    Argument,
    /// Operation not allowed in the current state (read-only, closed, unsupported)
    State,
    /// A typed read hit a cell holding another type
    TypeMismatch,
    /// File system or file content failure
    Io,
}

/// Errors that can occur while working with a spreadsheet
#[derive(Debug, Error)]
pub enum Error {
    /// File extension not handled by any backend
    #[error(
        "unable to detect a backend for {}: the extension '{extension}' is not valid, \
         please specify a file with one of the following extensions: xls, xlsx or ods",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Backend explicitly requested for a file it cannot handle
    #[error("unable to open {} with backend {backend}: {reason}", .path.display())]
    BackendNotAdmitted {
        path: PathBuf,
        backend: Backend,
        reason: String,
    },

    /// Refusing to create over an existing file
    #[error("cannot create file {}: the file already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Input file does not exist
    #[error("file {} not found", .0.display())]
    NotFound(PathBuf),

    /// Sheet lookup by name failed
    #[error("no sheet named '{0}'")]
    SheetNotFound(String),

    /// Sheet lookup by index failed
    #[error("sheet index {index} is out of range 0..{}", last_index(.count))]
    SheetIndexOutOfRange { index: usize, count: usize },

    /// Sheet name already taken in this spreadsheet
    #[error("a sheet named '{0}' already exists")]
    DuplicateSheetName(String),

    /// Sheet name rejected
    #[error("invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: String },

    /// Column label is not made of letters A-Z
    #[error("invalid column label '{0}'")]
    InvalidColumnLabel(String),

    /// Cell coordinates beyond what the backend can store
    #[error("cell [{row}, {col}] is outside the {backend} backend limits ({max_rows} rows, {max_cols} columns)")]
    CellOutOfBounds {
        row: u32,
        col: u32,
        backend: Backend,
        max_rows: u32,
        max_cols: u32,
    },

    /// Mutation attempted on a read-only spreadsheet or one of its sheets
    #[error("write operation not allowed on {0} opened in read-only mode")]
    ReadOnly(String),

    /// Feature not offered by the selected backend
    #[error("{feature} is not available on the {backend} backend")]
    Unsupported {
        feature: &'static str,
        backend: Backend,
    },

    /// Sheet handle used after its spreadsheet was closed
    #[error("the spreadsheet owning this sheet has been closed")]
    Closed,

    /// Typed read of a cell holding another type
    #[error("cannot retrieve a {requested} value from cell [{row}, {col}] holding a {actual} value")]
    TypeMismatch {
        requested: CellKind,
        actual: CellKind,
        row: u32,
        col: u32,
    },

    /// Native cell type with no generic counterpart
    #[error("cell [{row}, {col}] has type {native}, which is not handled")]
    UnhandledCellType { native: String, row: u32, col: u32 },

    /// IO error with the file it happened on
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by the wrapped spreadsheet library
    #[error("{backend} backend failed on {}: {source}", .path.display())]
    Backend {
        backend: Backend,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn last_index(count: &usize) -> i64 {
    *count as i64 - 1
}

impl Error {
    /// Build an [`Error::Io`] for `path`
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a library error, attaching the backend and file it came from
    pub fn backend<P, E>(backend: Backend, path: P, err: E) -> Self
    where
        P: Into<PathBuf>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Backend {
            backend,
            path: path.into(),
            source: Box::new(err),
        }
    }

    /// Build an [`Error::TypeMismatch`]
    pub fn type_mismatch(requested: CellKind, actual: CellKind, row: u32, col: u32) -> Self {
        Error::TypeMismatch {
            requested,
            actual,
            row,
            col,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat { .. }
            | Error::SheetNotFound(_)
            | Error::SheetIndexOutOfRange { .. }
            | Error::DuplicateSheetName(_)
            | Error::InvalidSheetName { .. }
            | Error::InvalidColumnLabel(_)
            | Error::CellOutOfBounds { .. } => ErrorKind::Argument,
            Error::BackendNotAdmitted { .. }
            | Error::AlreadyExists(_)
            | Error::ReadOnly(_)
            | Error::Unsupported { .. }
            | Error::Closed => ErrorKind::State,
            Error::TypeMismatch { .. } | Error::UnhandledCellType { .. } => {
                ErrorKind::TypeMismatch
            }
            Error::NotFound(_) | Error::Io { .. } | Error::Backend { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = Error::SheetIndexOutOfRange { index: 3, count: 2 };
        assert_eq!(err.to_string(), "sheet index 3 is out of range 0..1");

        let err = Error::SheetIndexOutOfRange { index: 0, count: 0 };
        assert_eq!(err.to_string(), "sheet index 0 is out of range 0..-1");
    }

    #[test]
    fn test_type_mismatch_names_both_kinds() {
        let err = Error::type_mismatch(CellKind::Number, CellKind::Text, 4, 2);
        let msg = err.to_string();
        assert!(msg.contains("number"));
        assert!(msg.contains("text"));
        assert!(msg.contains("[4, 2]"));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Error::SheetNotFound("x".into()).kind(), ErrorKind::Argument);
        assert_eq!(Error::ReadOnly("a.xlsx".into()).kind(), ErrorKind::State);
        assert_eq!(Error::Closed.kind(), ErrorKind::State);
        assert_eq!(
            Error::AlreadyExists(PathBuf::from("a.xlsx")).kind(),
            ErrorKind::State
        );
        assert_eq!(Error::NotFound(PathBuf::from("a.ods")).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_backend_error_keeps_source() {
        use std::error::Error as _;

        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad zip header");
        let err = Error::backend(Backend::Ods, "book.ods", cause);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("book.ods"));
        assert!(err.to_string().contains("bad zip header"));

        let source = err.source().expect("library error is kept as the source");
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
