//! BIFF8-style font and XF tables.
//!
//! Cells of the legacy backend do not carry a format directly; they point at
//! an extended format (XF) record by index, which in turn points at a font
//! record and names a palette color for the solid background pattern. This
//! mirrors how a `.xls` workbook stores styles, and is what a [`CellFormat`]
//! is translated into when a cell is written with a format.

use sheetbridge_core::{CellFormat, Color, Font};

/// Bold weight of a FONT record
const WEIGHT_BOLD: u16 = 700;
/// Regular weight of a FONT record
const WEIGHT_NORMAL: u16 = 400;

/// Index of the default XF every cell starts with
pub const DEFAULT_XF: u16 = 0;

/// Palette colors usable as a background, in [`Color::palette_index`] order
const PALETTE_COLORS: [Color; 9] = [
    Color::Black,
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Gray25,
    Color::Gray50,
    Color::Orange,
    Color::Gray80,
];

/// FONT record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XlsFont {
    pub name: String,
    /// Font height in twips (1/20 of a point).
    pub height_twips: u16,
    /// 400 = normal, 700 = bold.
    pub weight: u16,
}

impl XlsFont {
    fn from_font(font: &Font) -> Self {
        Self {
            name: font.name.clone(),
            height_twips: (font.size * 20.0).round().clamp(20.0, 8_190.0) as u16,
            weight: if font.bold { WEIGHT_BOLD } else { WEIGHT_NORMAL },
        }
    }

    fn to_font(&self) -> Font {
        Font::new(self.name.clone())
            .with_size(self.height_twips as f64 / 20.0)
            .with_bold(self.weight >= WEIGHT_BOLD)
    }
}

/// XF record data, reduced to what a [`CellFormat`] can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XlsXf {
    pub font_index: u16,
    /// Palette index of the solid fill, if any.
    pub pattern_color: Option<u8>,
}

/// Font and XF tables of one workbook.
#[derive(Debug, Clone)]
pub struct XlsStyles {
    fonts: Vec<XlsFont>,
    xfs: Vec<XlsXf>,
}

impl Default for XlsStyles {
    fn default() -> Self {
        Self {
            fonts: vec![XlsFont::from_font(&Font::default())],
            xfs: vec![XlsXf {
                font_index: 0,
                pattern_color: None,
            }],
        }
    }
}

impl XlsStyles {
    /// XF index for `format`, adding font and XF records as needed
    pub fn intern(&mut self, format: &CellFormat) -> u16 {
        let font = XlsFont::from_font(&format.font);
        let font_index = match self.fonts.iter().position(|f| *f == font) {
            Some(i) => i as u16,
            None => {
                self.fonts.push(font);
                (self.fonts.len() - 1) as u16
            }
        };

        let xf = XlsXf {
            font_index,
            pattern_color: format.background.map(|c| c.palette_index()),
        };
        match self.xfs.iter().position(|x| *x == xf) {
            Some(i) => i as u16,
            None => {
                self.xfs.push(xf);
                (self.xfs.len() - 1) as u16
            }
        }
    }

    /// Resolve an XF index back to a [`CellFormat`]
    pub fn resolve(&self, xf_index: u16) -> Option<CellFormat> {
        let xf = self.xfs.get(xf_index as usize)?;
        let font = self.fonts.get(xf.font_index as usize)?;
        let background = xf.pattern_color.and_then(|idx| {
            PALETTE_COLORS
                .iter()
                .copied()
                .find(|c| c.palette_index() == idx)
        });
        Some(CellFormat {
            font: font.to_font(),
            background,
        })
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn xf_count(&self) -> usize {
        self.xfs.len()
    }
}
