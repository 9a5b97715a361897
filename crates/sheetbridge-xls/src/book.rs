//! In-memory model of a legacy workbook

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;

use crate::styles::{XlsStyles, DEFAULT_XF};

/// Cell record, named after the BIFF record that stores it.
#[derive(Debug, Clone, PartialEq)]
pub enum XlsRecord {
    /// BLANK: formatted cell without a value
    Blank,
    /// LABEL / LABELSST
    Label(String),
    /// NUMBER / RK
    Number(f64),
    /// BOOLERR holding a boolean
    Boolean(bool),
    /// NUMBER with a date format
    Date(NaiveDateTime),
    /// BOOLERR holding an error code
    Error(String),
}

impl XlsRecord {
    /// Record type name, as used in messages
    pub fn type_name(&self) -> &'static str {
        match self {
            XlsRecord::Blank => "BLANK",
            XlsRecord::Label(_) => "LABEL",
            XlsRecord::Number(_) => "NUMBER",
            XlsRecord::Boolean(_) => "BOOLEAN",
            XlsRecord::Date(_) => "DATE",
            XlsRecord::Error(_) => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XlsCell {
    pub record: XlsRecord,
    /// Formula text, when the record holds a formula's cached result
    pub formula: Option<String>,
    pub xf: u16,
}

impl XlsCell {
    pub fn new(record: XlsRecord) -> Self {
        Self {
            record,
            formula: None,
            xf: DEFAULT_XF,
        }
    }
}

/// One worksheet: cells keyed by (row, column)
#[derive(Debug, Clone, Default)]
pub struct XlsGrid {
    pub name: String,
    pub cells: BTreeMap<(u32, u32), XlsCell>,
    pub hidden_columns: BTreeSet<u32>,
    /// Column widths in 1/256 of a character, as COLINFO stores them
    pub column_widths: BTreeMap<u32, u16>,
}

impl XlsGrid {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Highest row index holding a record, plus one
    pub fn rows(&self) -> u32 {
        self.cells.keys().next_back().map(|(r, _)| r + 1).unwrap_or(0)
    }

    /// Highest column index holding a record, plus one
    pub fn columns(&self) -> u32 {
        self.cells.keys().map(|(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Length of `row`: index of its last record, plus one
    pub fn row_len(&self, row: u32) -> u32 {
        self.cells
            .range((row, 0)..=(row, u32::MAX))
            .next_back()
            .map(|((_, c), _)| c + 1)
            .unwrap_or(0)
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&XlsCell> {
        self.cells.get(&(row, col))
    }

    /// Cells of column `col`
    pub fn column_cells(&self, col: u32) -> impl Iterator<Item = &XlsCell> + '_ {
        self.cells
            .iter()
            .filter(move |((_, c), _)| *c == col)
            .map(|(_, cell)| cell)
    }
}

/// Workbook globals plus its sheets
#[derive(Debug, Clone, Default)]
pub struct XlsBook {
    pub sheets: Vec<XlsGrid>,
    pub styles: XlsStyles,
}

impl XlsBook {
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }
}
