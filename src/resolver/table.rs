use std::collections::HashMap;

use crate::font::{FontResource, FontStyle};
use crate::guid::Guid;
use crate::options::ResolverOptions;
use crate::value::Value;
use crate::{PicError, Result};

use super::{NumberFormat, Resolver};

/// Resolver backed by fixed tables, typically loaded from the options file.
///
/// Numbers are read in the configured locale: thousands separators are dropped
/// and the decimal point may be any character.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    number_format: NumberFormat,
    default_font: Option<FontResource>,
    fonts: HashMap<Guid, FontResource>,
    styles: HashMap<Guid, FontStyle>,
}

impl TableResolver {
    #[must_use]
    pub fn new(options: &ResolverOptions) -> Self {
        Self {
            number_format: options.number_format,
            default_font: options.default_font.as_ref().map(|f| f.to_resource()),
            fonts: options
                .fonts
                .iter()
                .map(|entry| (entry.guid, entry.font.to_resource()))
                .collect(),
            styles: options
                .styles
                .iter()
                .map(|entry| (entry.guid, entry.to_style()))
                .collect(),
        }
    }

    #[must_use]
    pub const fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    #[must_use]
    pub fn with_default_font(mut self, font: FontResource) -> Self {
        self.default_font = Some(font);
        self
    }

    #[must_use]
    pub fn with_font(mut self, guid: Guid, font: FontResource) -> Self {
        self.fonts.insert(guid, font);
        self
    }

    #[must_use]
    pub fn with_style(mut self, guid: Guid, style: FontStyle) -> Self {
        self.styles.insert(guid, style);
        self
    }

    /// Rewrites locale text into the form Rust's parsers accept.
    fn normalize(&self, text: &str) -> String {
        let value = Value::from(text);
        value
            .text()
            .trim()
            .chars()
            .filter(|&c| c != self.number_format.thousands_separator)
            .map(|c| {
                if c == self.number_format.decimal_point {
                    '.'
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Resolver for TableResolver {
    #[allow(clippy::cast_possible_truncation)]
    fn integer(&self, text: &str) -> Result<i32> {
        let normalized = self.normalize(text);
        if let Ok(i) = normalized.parse::<i32>() {
            return Ok(i);
        }
        // Number and currency values convert to integers by truncation.
        let n = normalized
            .parse::<f64>()
            .map_err(|_| PicError::InvalidInteger(text.to_string()))?
            .trunc();
        if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&n) {
            Ok(n as i32)
        } else {
            Err(PicError::InvalidInteger(text.to_string()))
        }
    }

    fn number(&self, text: &str) -> Result<f64> {
        self.normalize(text)
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| PicError::InvalidNumber(text.to_string()))
    }

    fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    fn font_resource(&self, guid: &Guid) -> Result<FontResource> {
        if guid.is_zero() {
            return self
                .default_font
                .clone()
                .ok_or(PicError::DefaultFontNotFound);
        }
        self.fonts
            .get(guid)
            .cloned()
            .ok_or(PicError::FontNotFound(*guid))
    }

    fn font_style(&self, guid: &Guid) -> Result<FontStyle> {
        self.styles
            .get(guid)
            .cloned()
            .ok_or(PicError::StyleNotFound(*guid))
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
