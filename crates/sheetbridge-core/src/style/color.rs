//! Background colors

use std::fmt;

/// Named colors usable as cell backgrounds
///
/// Each color maps to the legacy BIFF palette (for the `.xls` backend) and
/// to an RGB triple (for the others).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    Blue,
    Gray25,
    Gray50,
    Gray80,
    Green,
    Orange,
    Red,
    Yellow,
}

impl Color {
    /// Index into the default BIFF8 color palette
    pub fn palette_index(&self) -> u8 {
        match self {
            Color::Black => 8,
            Color::Red => 10,
            Color::Blue => 12,
            Color::Yellow => 13,
            Color::Green => 17,
            Color::Gray25 => 22,
            Color::Gray50 => 23,
            Color::Orange => 53,
            Color::Gray80 => 63,
        }
    }

    /// RGB components as the default palette renders them
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Red => (255, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Green => (0, 128, 0),
            Color::Gray25 => (192, 192, 192),
            Color::Gray50 => (128, 128, 128),
            Color::Orange => (255, 102, 0),
            Color::Gray80 => (51, 51, 51),
        }
    }

    /// RGB packed as `0xRRGGBB`
    pub fn rgb(&self) -> u32 {
        let (r, g, b) = self.to_rgb();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    /// Hex string (e.g., "#008000")
    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.rgb())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Gray25 => "gray 25%",
            Color::Gray50 => "gray 50%",
            Color::Gray80 => "gray 80%",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Yellow => "yellow",
        })
    }
}
