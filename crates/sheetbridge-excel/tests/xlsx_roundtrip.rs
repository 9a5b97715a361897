//! End-to-end tests for the Excel backend (create -> write -> close -> open -> verify)

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use sheetbridge_core::{
    CellFormat, CellValue, Color, Error, ErrorKind, Font, Sheet, Spreadsheet,
};
use sheetbridge_excel::ExcelSpreadsheet;

fn release_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 2, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn heroes_header() -> Vec<CellValue> {
    ["Hero", "Origin", "Release Date", "Rarity", "HP"]
        .into_iter()
        .map(CellValue::from)
        .collect()
}

fn heroes_row() -> Vec<CellValue> {
    vec![
        CellValue::from("Alfonse"),
        CellValue::from("Fire Emblem Heroes"),
        CellValue::from(release_date()),
        CellValue::from(5),
        CellValue::from(18),
    ]
}

#[test]
fn test_heroes_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("heroes.xlsx");

    let mut book = ExcelSpreadsheet::create(&path).unwrap();
    let mut sheet = book.add_sheet("Heroes").unwrap();
    let header = CellFormat::new(Font::arial().with_bold(true)).with_background(Color::Green);
    sheet
        .set_row_at(0, 0, &heroes_header(), Some(&header))
        .unwrap();
    sheet.set_row(1, &heroes_row()).unwrap();
    sheet.auto_size_all().unwrap();
    book.write().unwrap();
    book.close().unwrap();

    let book = ExcelSpreadsheet::open(&path).unwrap();
    assert!(book.sheet_names().unwrap().contains(&"Heroes".to_string()));

    let sheet = book.sheet("Heroes").unwrap();
    assert_eq!(sheet.row_values(0).unwrap(), heroes_header());
    assert_eq!(sheet.row_values(1).unwrap(), heroes_row());
    assert_eq!(sheet.last_populated_row().unwrap(), 2);
}

#[test]
fn test_roundtrip_all_value_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("types.xlsx");
    let noon = NaiveDate::from_ymd_opt(2020, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let mut book = ExcelSpreadsheet::create(&path).unwrap();
    let mut sheet = book.add_sheet("Types").unwrap();
    sheet.set_text(0, 0, "Special: <>&\"'").unwrap();
    sheet.set_number(0, 1, -100.5).unwrap();
    sheet.set_date(0, 2, noon).unwrap();
    sheet.set_boolean(0, 3, false).unwrap();
    sheet.set_number(3, 5, 1e10).unwrap();
    book.write().unwrap();
    book.close().unwrap();

    let book = ExcelSpreadsheet::open(&path).unwrap();
    let sheet = book.sheet_at(0).unwrap();
    assert_eq!(sheet.name(), "Types");
    assert_eq!(sheet.text(0, 0).unwrap(), Some("Special: <>&\"'".to_string()));
    assert_eq!(sheet.number(0, 1).unwrap(), Some(-100.5));
    assert_eq!(sheet.date(0, 2).unwrap(), Some(noon));
    assert_eq!(sheet.boolean(0, 3).unwrap(), Some(false));
    assert_eq!(sheet.number(3, 5).unwrap(), Some(1e10));
    assert_eq!(sheet.value(2, 2).unwrap(), CellValue::Empty);
    assert_eq!(sheet.raw_text(0, 1).unwrap(), "-100.5");
    assert_eq!(sheet.row_count().unwrap(), 4);
}

#[test]
fn test_create_over_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exists.xlsx");
    std::fs::write(&path, b"placeholder").unwrap();

    let err = ExcelSpreadsheet::create(&path).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));
    assert_eq!(err.kind(), ErrorKind::State);
    assert!(err.to_string().contains("exists.xlsx"));
}

#[test]
fn test_edit_then_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edit.xlsx");

    let mut book = ExcelSpreadsheet::create(&path).unwrap();
    let mut sheet = book.add_sheet("Stats").unwrap();
    sheet.set_number(0, 0, 10.0).unwrap();
    book.write().unwrap();
    book.close().unwrap();

    let mut book = ExcelSpreadsheet::edit(&path).unwrap();
    let mut sheet = book.sheet("Stats").unwrap();
    sheet.add_to_number(0, 0, Some(5.0)).unwrap();
    sheet.add_to_number(1, 0, Some(1.0)).unwrap();
    book.add_sheet("More").unwrap();
    book.write().unwrap();
    book.close().unwrap();

    let book = ExcelSpreadsheet::open(&path).unwrap();
    assert_eq!(
        book.sheet_names().unwrap(),
        vec!["Stats".to_string(), "More".to_string()]
    );
    let sheet = book.sheet("Stats").unwrap();
    assert_eq!(sheet.number(0, 0).unwrap(), Some(15.0));
    assert_eq!(sheet.number(1, 0).unwrap(), Some(1.0));
}

#[test]
fn test_read_only_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ro.xlsx");

    let mut book = ExcelSpreadsheet::create(&path).unwrap();
    book.add_sheet("Data").unwrap().set_text(0, 0, "x").unwrap();
    book.write().unwrap();
    book.close().unwrap();
    let before = std::fs::read(&path).unwrap();

    let mut book = ExcelSpreadsheet::open(&path).unwrap();
    let mut sheet = book.sheet("Data").unwrap();
    assert!(matches!(sheet.set_text(0, 0, "y"), Err(Error::ReadOnly(_))));
    assert!(matches!(
        sheet.set_value(1, 1, CellValue::from(1)),
        Err(Error::ReadOnly(_))
    ));
    assert!(matches!(book.add_sheet("Other"), Err(Error::ReadOnly(_))));
    assert!(matches!(book.write(), Err(Error::ReadOnly(_))));
    book.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_sheet_used_after_close() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = ExcelSpreadsheet::create(dir.path().join("closed.xlsx")).unwrap();
    let mut sheet = book.add_sheet("Data").unwrap();
    book.close().unwrap();
    book.close().unwrap();

    assert!(matches!(sheet.value(0, 0), Err(Error::Closed)));
    assert!(matches!(sheet.set_text(0, 0, "x"), Err(Error::Closed)));
}

#[test]
fn test_missing_sheet_names_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = ExcelSpreadsheet::create(dir.path().join("s.xlsx")).unwrap();
    book.add_sheet("Present").unwrap();

    let err = book.sheet("DoesNotExist").err().expect("lookup should fail");
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(err.to_string().contains("DoesNotExist"));
}

#[test]
fn test_edit_keeps_formula_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("formulas.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sums").unwrap();
    worksheet.write_number(0, 0, 1.0).unwrap();
    worksheet.write_number(1, 0, 2.0).unwrap();
    worksheet
        .write_formula(2, 0, rust_xlsxwriter::Formula::new("=SUM(A1:A2)").set_result("3"))
        .unwrap();
    worksheet
        .write_formula(2, 1, rust_xlsxwriter::Formula::new("=A1>0").set_result("TRUE"))
        .unwrap();
    workbook.save(&path).unwrap();

    let mut book = ExcelSpreadsheet::edit(&path).unwrap();
    let mut sheet = book.sheet("Sums").unwrap();
    assert_eq!(sheet.number(2, 0).unwrap(), Some(3.0));
    sheet.set_text(5, 5, "unrelated").unwrap();
    book.write().unwrap();
    book.close().unwrap();

    let book = ExcelSpreadsheet::open(&path).unwrap();
    let sheet = book.sheet("Sums").unwrap();
    assert_eq!(sheet.value(2, 0).unwrap(), CellValue::Number(3.0));
    assert_eq!(sheet.value(2, 1).unwrap(), CellValue::Boolean(true));
    assert!(sheet.raw_text(2, 0).unwrap().contains("SUM(A1:A2)"));
    assert_eq!(sheet.text(5, 5).unwrap(), Some("unrelated".to_string()));
}
