//! The resolver capability: locale conversions and font lookup supplied by the host.

mod table;

use serde::{Deserialize, Serialize};

pub use table::TableResolver;

use crate::Result;
use crate::font::{FontResource, FontStyle};
use crate::guid::Guid;

/// How a number should be formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub thousands_separator: char,
    pub decimal_point: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
            decimal_point: '.',
        }
    }
}

/// Services the decoder needs from its host.
///
/// Every operation may fail; callers log the failure and fall back to a default.
pub trait Resolver {
    /// Locale-aware integer conversion.
    ///
    /// # Errors
    /// Returns an error if `text` is not an integer in the host's locale.
    fn integer(&self, text: &str) -> Result<i32>;

    /// Locale-aware number conversion.
    ///
    /// # Errors
    /// Returns an error if `text` is not a number in the host's locale.
    fn number(&self, text: &str) -> Result<f64>;

    /// Separators of the host's locale.
    fn number_format(&self) -> NumberFormat;

    /// Looks up a font resource. The zero GUID asks for the default font.
    ///
    /// # Errors
    /// Returns an error if the host has no such font.
    fn font_resource(&self, guid: &Guid) -> Result<FontResource>;

    /// Looks up a font style.
    ///
    /// # Errors
    /// Returns an error if the host has no such style.
    fn font_style(&self, guid: &Guid) -> Result<FontStyle>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn integer(&self, text: &str) -> Result<i32> {
        (**self).integer(text)
    }

    fn number(&self, text: &str) -> Result<f64> {
        (**self).number(text)
    }

    fn number_format(&self) -> NumberFormat {
        (**self).number_format()
    }

    fn font_resource(&self, guid: &Guid) -> Result<FontResource> {
        (**self).font_resource(guid)
    }

    fn font_style(&self, guid: &Guid) -> Result<FontStyle> {
        (**self).font_style(guid)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn integer(&self, text: &str) -> Result<i32> {
        (**self).integer(text)
    }

    fn number(&self, text: &str) -> Result<f64> {
        (**self).number(text)
    }

    fn number_format(&self) -> NumberFormat {
        (**self).number_format()
    }

    fn font_resource(&self, guid: &Guid) -> Result<FontResource> {
        (**self).font_resource(guid)
    }

    fn font_style(&self, guid: &Guid) -> Result<FontStyle> {
        (**self).font_style(guid)
    }
}
