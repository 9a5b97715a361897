//! Cell display formats
//!
//! A [`CellFormat`] is a small immutable description (font and background)
//! that each backend maps onto its own styling primitives when a cell is
//! written. Formats compare and hash by value, so backends can cache the
//! native style they build for each one.

mod color;
mod font;

pub use color::Color;
pub use font::{Font, DEFAULT_FONT_SIZE};

/// Display format applied to a cell at write time
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormat {
    /// Font
    pub font: Font,
    /// Background fill, none for the backend default
    pub background: Option<Color>,
}

impl CellFormat {
    /// Format with the given font and no background
    pub fn new(font: Font) -> Self {
        Self {
            font,
            background: None,
        }
    }

    /// Set the background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Shortcut for a bold font of the default family and size
    pub fn bold() -> Self {
        Self::new(Font::default().with_bold(true))
    }
}
