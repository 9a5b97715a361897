//! Mapping [`CellFormat`]s onto OpenDocument cell styles

use std::collections::HashMap;

use sheetbridge_core::CellFormat;
use spreadsheet_ods::color::Rgb;
use spreadsheet_ods::defaultstyles::DefaultFormat;
use spreadsheet_ods::style::units::{FontSize, Length};
use spreadsheet_ods::style::CellStyle;
use spreadsheet_ods::{CellStyleRef, WorkBook};

/// Prefix of the automatic styles created here, kept apart from the `ce<N>`
/// names office suites use
const STYLE_PREFIX: &str = "sb";

/// Build the cell style for `format`, named `name`
pub fn cell_style(name: &str, format: &CellFormat) -> CellStyle {
    let mut style = CellStyle::new(name, &DefaultFormat::default());
    style.set_font_name(format.font.name.as_str());
    style.set_font_size(FontSize::Length(Length::Pt(format.font.size)));
    if format.font.bold {
        style.set_font_bold();
    }
    if let Some(color) = format.background {
        let (r, g, b) = color.to_rgb();
        style.set_background_color(Rgb::new(r, g, b));
    }
    style
}

/// Cell styles registered in one workbook, one per distinct format
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<CellFormat, CellStyleRef>,
    /// Last numeric suffix handed out
    counter: usize,
}

impl StyleRegistry {
    /// Style reference for `format`, registering the style on first use
    pub fn style_for(&mut self, book: &mut WorkBook, format: &CellFormat) -> CellStyleRef {
        if let Some(style) = self.styles.get(format) {
            return style.clone();
        }
        let name = self.unused_name(book);
        let style = book.add_cellstyle(cell_style(&name, format));
        self.styles.insert(format.clone(), style.clone());
        style
    }

    /// Next `sb<N>` name not taken by a style already in `book`, such as
    /// one loaded from a file written by an earlier session
    fn unused_name(&mut self, book: &WorkBook) -> String {
        loop {
            self.counter += 1;
            let name = format!("{}{}", STYLE_PREFIX, self.counter);
            if book.cellstyle(name.as_str()).is_none() {
                return name;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
