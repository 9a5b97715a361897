//! In-memory workbook shared by the reader, the writer and the sheet views

use std::collections::{BTreeMap, BTreeSet};

use calamine::Data;
use sheetbridge_core::CellFormat;

#[derive(Debug, Clone, PartialEq)]
pub struct ExcelCell {
    /// Value, or cached formula result
    pub data: Data,
    pub formula: Option<String>,
    /// Format applied during this session; formats stored in the file are not loaded
    pub format: Option<CellFormat>,
}

impl ExcelCell {
    pub fn new(data: Data) -> Self {
        Self {
            data,
            formula: None,
            format: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExcelGrid {
    pub name: String,
    pub cells: BTreeMap<(u32, u32), ExcelCell>,
    pub hidden_columns: BTreeSet<u32>,
    /// Column widths in character units
    pub column_widths: BTreeMap<u32, f64>,
}

impl ExcelGrid {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Last row number plus one
    pub fn rows(&self) -> u32 {
        self.cells.keys().next_back().map(|(r, _)| r + 1).unwrap_or(0)
    }

    /// Widest row
    pub fn columns(&self) -> u32 {
        self.cells.keys().map(|(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Last cell number of `row` plus one, 0 for a missing row
    pub fn last_cell_num(&self, row: u32) -> u32 {
        self.cells
            .range((row, 0)..=(row, u32::MAX))
            .next_back()
            .map(|((_, c), _)| c + 1)
            .unwrap_or(0)
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&ExcelCell> {
        self.cells.get(&(row, col))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExcelBook {
    pub sheets: Vec<ExcelGrid>,
}

impl ExcelBook {
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }
}
