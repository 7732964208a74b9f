//! Font references.
//!
//! A font property is a dataset whose first cell is `ESC f` followed by a GUID.
//! A `$` before the GUID makes it a style reference, encoded in one row. A font
//! resource reference has two more rows: its colour and its underline flag.

mod resource;

use serde::Serialize;

pub use resource::{FontAttributes, FontResource, FontStyle};

use crate::ascii::ESC;
use crate::color::Color;
use crate::dataset::Dataset;
use crate::guid::Guid;
use crate::{PicError, Result};

/// Marker letter after `ESC` identifying a font value.
const FONT_TAG: char = 'f';
/// Prefix marking a style reference.
const STYLE_MARKER: char = '$';

/// A font value from the chart configuration.
///
/// The default (zero GUID, not a style) asks the host for its default font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Font {
    pub is_style: bool,
    pub guid: Guid,
    pub color: Color,
    pub underline: bool,
}

impl Font {
    /// Decodes a font from a dataset.
    ///
    /// # Errors
    /// Returns an error if the first cell is not a font value, the row count does
    /// not match the font kind, or the GUID, colour or underline rows are malformed.
    pub fn parse(dataset: &Dataset) -> Result<Self> {
        let head = dataset.first().as_str();
        let body = head
            .strip_prefix(ESC)
            .and_then(|rest| rest.strip_prefix(FONT_TAG))
            .ok_or_else(|| PicError::InvalidFont(head.to_string()))?;

        let (is_style, guid_text) = match body.strip_prefix(STYLE_MARKER) {
            Some(rest) if body.len() > 1 => (true, rest),
            _ => (false, body),
        };

        let expected = if is_style { 1 } else { 3 };
        if dataset.len() != expected {
            return Err(PicError::InvalidFontSet {
                expected,
                actual: dataset.len(),
            });
        }

        let guid = Guid::parse(guid_text)?;
        if is_style {
            return Ok(Self {
                is_style,
                guid,
                ..Self::default()
            });
        }

        Ok(Self {
            is_style,
            guid,
            color: Color::parse(&dataset[1])?,
            underline: parse_bool(dataset[2][0].as_str())?,
        })
    }
}

/// Strict boolean in the host's spellings.
fn parse_bool(text: &str) -> Result<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(PicError::InvalidBool(text.to_string())),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
