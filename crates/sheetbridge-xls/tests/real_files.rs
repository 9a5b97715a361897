//! Integration tests reading the .xls files checked in under excel_samples/

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetbridge_core::{CellValue, Error, Mode, Sheet, Spreadsheet};
use sheetbridge_xls::XlsSpreadsheet;

fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
}

fn heroes_sample() -> PathBuf {
    project_root().join("excel_samples/heroes.xls")
}

/// Copy of the sample in a scratch directory, for tests that may write
fn scratch_copy(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("heroes.xls");
    std::fs::copy(heroes_sample(), &path).unwrap();
    path
}

#[test]
fn test_open_heroes_sample() {
    let book = XlsSpreadsheet::open(heroes_sample()).unwrap();
    assert_eq!(book.mode(), Mode::Open);
    assert_eq!(
        book.sheet_names().unwrap(),
        vec!["Heroes".to_string(), "Stats".to_string()]
    );

    let sheet = book.sheet("Heroes").unwrap();
    assert_eq!(sheet.row_count().unwrap(), 2);
    assert_eq!(sheet.last_populated_column(0).unwrap(), 5);
    assert_eq!(
        sheet.row_values(0).unwrap(),
        ["Hero", "Origin", "Release Date", "Rarity", "HP"]
            .into_iter()
            .map(CellValue::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(sheet.text(1, 0).unwrap(), Some("Alfonse".to_string()));
    assert_eq!(
        sheet.date(1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2017, 2, 2).and_then(|d| d.and_hms_opt(0, 0, 0))
    );
    assert_eq!(sheet.number(1, 4).unwrap(), Some(18.0));
}

#[test]
fn test_formulas_booleans_and_errors() {
    let book = XlsSpreadsheet::open(heroes_sample()).unwrap();
    let sheet = book.xls_sheet("Stats").unwrap();

    assert_eq!(sheet.boolean(0, 1).unwrap(), Some(true));
    assert_eq!(sheet.number(2, 0).unwrap(), Some(3.0));
    assert_eq!(sheet.formula(2, 0).unwrap().as_deref(), Some("A1+A2"));
    assert_eq!(sheet.raw_text(2, 0).unwrap(), "A1+A2");

    assert_eq!(sheet.raw_text(1, 1).unwrap(), "#DIV/0!");
    assert!(matches!(
        sheet.value(1, 1),
        Err(Error::UnhandledCellType { row: 1, col: 1, .. })
    ));
}

#[test]
fn test_open_leaves_sample_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_copy(&dir);
    let before = std::fs::read(&path).unwrap();

    let mut book = XlsSpreadsheet::open(&path).unwrap();
    let mut sheet = book.sheet("Heroes").unwrap();
    assert!(matches!(sheet.set_text(5, 0, "x"), Err(Error::ReadOnly(_))));
    assert!(matches!(book.add_sheet("Other"), Err(Error::ReadOnly(_))));
    assert!(matches!(book.write(), Err(Error::ReadOnly(_))));
    book.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_edit_sample_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_copy(&dir);
    let before = std::fs::read(&path).unwrap();

    let mut book = XlsSpreadsheet::edit(&path).unwrap();
    let mut sheet = book.sheet("Heroes").unwrap();
    sheet.add_to_number(1, 3, Some(1.0)).unwrap();
    assert_eq!(sheet.number(1, 3).unwrap(), Some(6.0));
    book.add_sheet("Notes").unwrap().set_text(0, 0, "draft").unwrap();
    assert_eq!(book.sheet_count().unwrap(), 3);

    assert!(matches!(book.write(), Err(Error::Unsupported { .. })));
    book.close().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), before);
}
