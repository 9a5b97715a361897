//! Backend and access mode enumerations

use std::fmt;
use std::str::FromStr;

/// One of the wrapped spreadsheet libraries
///
/// Ordering follows declaration order and only exists so that sets of
/// backends print deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Legacy binary Excel only (`.xls`)
    Xls,
    /// General Excel backend (`.xls` and `.xlsx`)
    Excel,
    /// OpenDocument spreadsheets (`.ods`)
    Ods,
}

impl Backend {
    /// All backends, in declaration order
    pub const ALL: [Backend; 3] = [Backend::Xls, Backend::Excel, Backend::Ods];

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Xls => "xls",
            Backend::Excel => "excel",
            Backend::Ods => "ods",
        }
    }

    /// File extensions this backend can be bound to
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Backend::Xls => &[XLS_EXTENSION],
            Backend::Excel => &[XLS_EXTENSION, XLSX_EXTENSION],
            Backend::Ods => &[ODS_EXTENSION],
        }
    }

    /// Whether `extension` (without the dot, any case) is handled by this backend
    pub fn handles(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xls" => Ok(Backend::Xls),
            "excel" | "xlsx" => Ok(Backend::Excel),
            "ods" => Ok(Backend::Ods),
            other => Err(format!(
                "unknown backend '{other}', expected one of: xls, excel, ods"
            )),
        }
    }
}

/// Legacy binary Excel extension
pub const XLS_EXTENSION: &str = "xls";
/// Modern Excel extension
pub const XLSX_EXTENSION: &str = "xlsx";
/// OpenDocument spreadsheet extension
pub const ODS_EXTENSION: &str = "ods";

/// Every extension handled by at least one backend
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [XLS_EXTENSION, XLSX_EXTENSION, ODS_EXTENSION];

/// How a spreadsheet was acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// New document; the file is written on `write()`
    Create,
    /// Existing document, mutable
    Edit,
    /// Existing document, read-only
    Open,
}

impl Mode {
    /// Whether mutations are allowed in this mode
    pub fn is_editable(&self) -> bool {
        !matches!(self, Mode::Open)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Create => "create",
            Mode::Edit => "edit",
            Mode::Open => "open",
        })
    }
}
