//! Reading the legacy .xls sample under excel_samples/ through the Excel backend

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetbridge_core::{Backend, CellValue, Error, Sheet, Spreadsheet};
use sheetbridge_excel::ExcelSpreadsheet;

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

#[test]
fn test_open_legacy_sample() {
    let book = ExcelSpreadsheet::open(heroes_sample()).unwrap();
    assert_eq!(book.backend(), Backend::Excel);
    assert_eq!(
        book.sheet_names().unwrap(),
        vec!["Heroes".to_string(), "Stats".to_string()]
    );

    let heroes = book.sheet("Heroes").unwrap();
    assert_eq!(heroes.last_populated_row().unwrap(), 2);
    assert_eq!(
        heroes.row_values(1).unwrap(),
        vec![
            CellValue::from("Alfonse"),
            CellValue::from("Fire Emblem Heroes"),
            CellValue::from(NaiveDate::from_ymd_opt(2017, 2, 2).and_then(|d| d.and_hms_opt(0, 0, 0))),
            CellValue::from(5),
            CellValue::from(18),
        ]
    );

    let stats = book.sheet("Stats").unwrap();
    assert_eq!(stats.boolean(0, 1).unwrap(), Some(true));
    assert_eq!(stats.number(2, 0).unwrap(), Some(3.0));
    assert_eq!(stats.raw_text(2, 0).unwrap(), "A1+A2");
    assert_eq!(stats.value(1, 1).unwrap(), CellValue::text("#DIV/0!"));
}

#[test]
fn test_open_legacy_sample_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("heroes.xls");
    std::fs::copy(heroes_sample(), &path).unwrap();
    let before = std::fs::read(&path).unwrap();

    let mut book = ExcelSpreadsheet::open(&path).unwrap();
    let mut sheet = book.sheet("Stats").unwrap();
    assert!(matches!(sheet.set_number(0, 0, 9.0), Err(Error::ReadOnly(_))));
    assert!(matches!(book.write(), Err(Error::ReadOnly(_))));
    book.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_edit_legacy_sample_cannot_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("heroes.xls");
    std::fs::copy(heroes_sample(), &path).unwrap();
    let before = std::fs::read(&path).unwrap();

    let mut book = ExcelSpreadsheet::edit(&path).unwrap();
    let mut sheet = book.sheet("Heroes").unwrap();
    sheet.add_to_number(1, 4, Some(2.0)).unwrap();
    assert_eq!(sheet.number(1, 4).unwrap(), Some(20.0));

    assert!(matches!(book.write(), Err(Error::Unsupported { .. })));
    book.close().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), before);
}
