//! Colour values: named palette entries or packed RGB/CMYK pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;
use crate::{PicError, Result};

/// A colour value from the chart configuration.
///
/// CMYK components hold percentages (0-100) stored literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub r: u8,
    #[serde(default)]
    pub g: u8,
    #[serde(default)]
    pub b: u8,
    #[serde(default)]
    pub c: u8,
    #[serde(default)]
    pub m: u8,
    #[serde(default)]
    pub y: u8,
    #[serde(default)]
    pub k: u8,
}

/// The default colour value (black).
pub const DEFAULT_COLOR: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    c: 0,
    m: 0,
    y: 0,
    k: 100,
};

impl Default for Color {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

/// The sixteen host palette colours, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Blue,
    Brown,
    Green,
    Magenta,
    Red,
    Cyan,
    Yellow,
    DarkBlue,
    DarkGreen,
    Teal,
    Gray,
    Mustard,
    Orange,
    Purple,
    White,
}

impl NamedColor {
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Blue,
        Self::Brown,
        Self::Green,
        Self::Magenta,
        Self::Red,
        Self::Cyan,
        Self::Yellow,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::Teal,
        Self::Gray,
        Self::Mustard,
        Self::Orange,
        Self::Purple,
        Self::White,
    ];

    /// Palette entry for an index; anything outside 0..=15 is [`NamedColor::Black`].
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Self::Black)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn color(self) -> Color {
        let [r, b, g] = NAMED_RGB[self.index()];
        let [c, m, y, k] = NAMED_CMYK[self.index()];
        Color { r, g, b, c, m, y, k }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Brown => "Brown",
            Self::Green => "Green",
            Self::Magenta => "Magenta",
            Self::Red => "Red",
            Self::Cyan => "Cyan",
            Self::Yellow => "Yellow",
            Self::DarkBlue => "Dark Blue",
            Self::DarkGreen => "Dark Green",
            Self::Teal => "Teal",
            Self::Gray => "Gray",
            Self::Mustard => "Mustard",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::White => "White",
        };
        f.write_str(name)
    }
}

// Entries are read back as [r, b, g]; see `NamedColor::color`.
const NAMED_RGB: [[u8; 3]; 16] = [
    [0, 0, 0],
    [0, 0, 255],
    [144, 48, 0],
    [0, 255, 0],
    [255, 0, 255],
    [255, 0, 0],
    [0, 255, 255],
    [255, 255, 0],
    [0, 0, 170],
    [0, 146, 0],
    [0, 146, 170],
    [131, 131, 131],
    [196, 160, 32],
    [255, 128, 0],
    [170, 0, 170],
    [255, 255, 255],
];

const NAMED_CMYK: [[u8; 4]; 16] = [
    [0, 0, 0, 100],
    [100, 100, 0, 0],
    [0, 38, 57, 43],
    [100, 0, 100, 0],
    [0, 100, 0, 0],
    [0, 100, 100, 0],
    [100, 0, 0, 0],
    [0, 0, 100, 0],
    [67, 67, 0, 33],
    [58, 0, 58, 42],
    [67, 9, 0, 33],
    [0, 0, 0, 48],
    [0, 14, 64, 23],
    [0, 49, 100, 0],
    [0, 67, 0, 33],
    [0, 0, 0, 0],
];

impl Color {
    /// Decodes a colour from the values of one dataset row.
    ///
    /// One value is a named palette index. Four values are
    /// `(colour space, named index, packed RGB, packed CMYK)`; only the packed
    /// pair is used. Unparsable integers count as zero.
    ///
    /// # Errors
    /// Returns [`PicError::InvalidColorSet`] for any other number of values.
    pub fn parse(values: &[Value]) -> Result<Self> {
        match values {
            [index] => Ok(NamedColor::from_index(parse_attribute(index)).color()),
            [_, _, rgb, cmyk] => Ok(Self::from_packed(
                parse_attribute(rgb),
                parse_attribute(cmyk),
            )),
            _ => Err(PicError::InvalidColorSet(
                values.iter().map(|v| v.as_str().to_string()).collect(),
            )),
        }
    }

    /// Unpacks `0xRRGGBB` and `0xCCMMYYKK` integers.
    #[must_use]
    pub const fn from_packed(rgb: i32, cmyk: i32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        let [c, m, y, k] = cmyk.to_be_bytes();
        Self { r, g, b, c, m, y, k }
    }

    /// CSS-style `#RRGGBB` form of the additive components.
    #[must_use]
    pub fn rgb_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn parse_attribute(value: &Value) -> i32 {
    value.as_str().parse().unwrap_or(0)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
