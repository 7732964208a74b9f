//! Font resources and styles supplied by the host.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::{Color, DEFAULT_COLOR};

/// Combination of font attribute flags, using the host's bit values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontAttributes(u16);

impl FontAttributes {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(0x0001);
    pub const ITALIC: Self = Self(0x0002);
    pub const EMULATE_BOLD: Self = Self(0x0004);
    pub const EMULATE_ITALIC: Self = Self(0x0008);
    pub const EMULATE_TYPEFACE: Self = Self(0x0010);

    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for FontAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for FontAttributes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A font resource from the host.
///
/// `file_name` points at the font file; loading it is up to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FontResource {
    pub typeface: String,
    pub point_size: f64,
    pub attributes: FontAttributes,
    pub file_name: String,
}

impl FontResource {
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(FontAttributes::BOLD)
    }

    #[must_use]
    pub const fn is_italic(&self) -> bool {
        self.attributes.contains(FontAttributes::ITALIC)
    }

    #[must_use]
    pub const fn emulate_bold(&self) -> bool {
        self.attributes.contains(FontAttributes::EMULATE_BOLD)
    }

    #[must_use]
    pub const fn emulate_italic(&self) -> bool {
        self.attributes.contains(FontAttributes::EMULATE_ITALIC)
    }

    #[must_use]
    pub const fn emulate_typeface(&self) -> bool {
        self.attributes.contains(FontAttributes::EMULATE_TYPEFACE)
    }

    /// The empty resource, which tells the renderer to use its own default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.typeface.is_empty() && self.file_name.is_empty()
    }
}

impl fmt::Display for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(default)");
        }
        write!(f, "{} {}pt", self.typeface, self.point_size)?;
        if self.is_bold() {
            f.write_str(" bold")?;
        }
        if self.is_italic() {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

/// A resolved font: resource plus colour and underline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontStyle {
    pub font_resource: Arc<FontResource>,
    pub color: Color,
    pub underline: bool,
}

impl FontStyle {
    #[must_use]
    pub fn new(font_resource: FontResource, color: Color, underline: bool) -> Self {
        Self {
            font_resource: Arc::new(font_resource),
            color,
            underline,
        }
    }

    /// Style used when the host cannot supply one.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FontResource::default(), DEFAULT_COLOR, false)
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
