//! Font settings

use std::hash::{Hash, Hasher};

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Font applied to a written cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Font family name (e.g., "Arial", "Calibri")
    pub name: String,
    /// Font size in points
    pub size: f64,
    /// Bold
    pub bold: bool,
}

impl Font {
    /// Arial family name
    pub const ARIAL: &'static str = "Arial";
    /// Calibri family name
    pub const CALIBRI: &'static str = "Calibri";

    /// Create a regular font of the default size
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_FONT_SIZE,
            bold: false,
        }
    }

    /// Arial, default size
    pub fn arial() -> Self {
        Self::new(Self::ARIAL)
    }

    /// Calibri, default size
    pub fn calibri() -> Self {
        Self::new(Self::CALIBRI)
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::arial()
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
    }
}
