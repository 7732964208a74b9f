//! The chart configuration of one render request.
//!
//! A [`Config`] owns the property and symbol tables decoded from the host's
//! strings and hands out typed values. Malformed or missing properties never
//! fail: they are logged and replaced with defaults.

mod fonts;

use std::fmt;

use tracing::warn;

pub use fonts::FontCache;

use crate::color::{Color, DEFAULT_COLOR};
use crate::data::Data;
use crate::dataset::Dataset;
use crate::datastyle::DataStyles;
use crate::font::{Font, FontStyle};
use crate::resolver::{NumberFormat, Resolver};
use crate::table::{SettingsTable, SymbolTable};
use crate::twiplet::Twiplet;
use crate::value::Value;

/// Property holding the configuration name.
pub const NAME_PROPERTY: &str = "config";

/// Properties read by [`Config::data`].
pub const DATA_VALUES: &str = "data.values";
pub const DATA_TITLES: &str = "data.titles";
pub const DATA_COLORS: &str = "data.colors";
pub const DATA_STYLES: &str = "data.styles";
pub const DATA_LABELS: &str = "data.labels";
pub const DATA_FONTS: &str = "data.fonts";
pub const DATA_FORMATS: &str = "data.formats";

/// Configuration of the chart to be rendered.
pub struct Config<'r> {
    resolver: Box<dyn Resolver + 'r>,
    properties: SettingsTable,
    symbols: SymbolTable,
    fonts: FontCache,
}

impl fmt::Debug for Config<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("properties", &self.properties)
            .field("symbols", &self.symbols)
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}

impl<'r> Config<'r> {
    /// Builds a configuration from newline-separated `key=value` property and
    /// symbol text.
    pub fn new(resolver: impl Resolver + 'r, properties: &str, symbols: &str) -> Self {
        Self {
            resolver: Box::new(resolver),
            properties: SettingsTable::from_lines(properties),
            symbols: SymbolTable::from_lines(symbols),
            fonts: FontCache::new(),
        }
    }

    #[must_use]
    pub const fn properties(&self) -> &SettingsTable {
        &self.properties
    }

    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[must_use]
    pub const fn font_cache(&self) -> &FontCache {
        &self.fonts
    }

    /// Locale separators supplied by the resolver.
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        self.resolver.number_format()
    }

    /// A property with its symbol reference resolved; empty when absent.
    #[must_use]
    pub fn value(&self, name: &str) -> Value {
        self.properties
            .get(name)
            .map(|raw| Value::new(self.symbols.resolve(raw)))
            .unwrap_or_default()
    }

    /// The configuration name.
    #[must_use]
    pub fn name(&self) -> String {
        self.value(NAME_PROPERTY).into_string()
    }

    /// A property as an integer; zero when empty or unconvertible.
    #[must_use]
    pub fn integer(&self, name: &str) -> i32 {
        self.resolve_integer(&self.value(name))
    }

    /// A property as a number; zero when empty or unconvertible.
    #[must_use]
    pub fn number(&self, name: &str) -> f64 {
        self.resolve_number(&self.value(name))
    }

    /// A property as a length; zero when empty or unconvertible.
    #[must_use]
    pub fn twiplet(&self, name: &str) -> Twiplet {
        self.resolve_twiplet(&self.value(name))
    }

    #[must_use]
    pub fn resolve_integer(&self, value: &Value) -> i32 {
        if value.is_empty() {
            return 0;
        }
        self.resolver.integer(value.as_str()).unwrap_or_else(|err| {
            warn!(value = value.as_str(), error = %err, "integer conversion failed");
            0
        })
    }

    #[must_use]
    pub fn resolve_number(&self, value: &Value) -> f64 {
        if value.is_empty() {
            return 0.0;
        }
        self.resolver.number(value.as_str()).unwrap_or_else(|err| {
            warn!(value = value.as_str(), error = %err, "number conversion failed");
            0.0
        })
    }

    #[must_use]
    pub fn resolve_twiplet(&self, value: &Value) -> Twiplet {
        Twiplet(self.resolve_integer(value))
    }

    /// A property as a colour; [`DEFAULT_COLOR`] when absent or malformed.
    #[must_use]
    pub fn color(&self, name: &str) -> Color {
        self.raw(name)
            .map_or(DEFAULT_COLOR, |raw| self.load_color(raw))
    }

    /// A property as a font; the default font when absent or malformed.
    #[must_use]
    pub fn font(&self, name: &str) -> Font {
        self.raw(name).map_or_else(Font::default, |raw| self.load_font(raw))
    }

    /// A property as a dataset; one empty value when absent.
    #[must_use]
    pub fn dataset(&self, name: &str) -> Dataset {
        self.raw(name)
            .map_or_else(Dataset::empty, |raw| Dataset::parse(raw, &self.symbols))
    }

    /// Resolves a font through the resolver, at most once per GUID.
    pub fn resolve_font(&mut self, font: &Font) -> FontStyle {
        if font.is_style {
            return self.fonts.style(self.resolver.as_ref(), &font.guid);
        }
        FontStyle {
            font_resource: self.fonts.resource(self.resolver.as_ref(), &font.guid),
            color: font.color,
            underline: font.underline,
        }
    }

    /// All of the data properties.
    #[must_use]
    pub fn data(&self) -> Data {
        Data {
            values: self.data_values(),
            titles: self.data_titles(),
            colors: self.data_colors(),
            styles: self.data_styles(),
            labels: self.data_labels(),
            fonts: self.data_fonts(),
            formats: self.data_formats(),
        }
    }

    #[must_use]
    pub fn data_values(&self) -> Dataset {
        self.dataset(DATA_VALUES)
    }

    /// The first value of each set.
    #[must_use]
    pub fn data_titles(&self) -> Vec<Value> {
        self.dataset(DATA_TITLES)
            .iter()
            .map(|set| set.first().cloned().unwrap_or_default())
            .collect()
    }

    /// A single set gives one colour per data point; several sets give one
    /// colour per series from the first value of each.
    #[must_use]
    pub fn data_colors(&self) -> Vec<Color> {
        let ds = self.dataset(DATA_COLORS);
        if ds.len() == 1 && !ds.first_set().is_empty() {
            return ds
                .first_set()
                .iter()
                .map(|value| self.load_color(value.as_str()))
                .collect();
        }
        ds.iter()
            .map(|set| set.first().map_or("", Value::as_str))
            .map(|raw| self.load_color(raw))
            .collect()
    }

    #[must_use]
    pub fn data_styles(&self) -> DataStyles {
        DataStyles::from_dataset(&self.dataset(DATA_STYLES), &self.symbols)
    }

    /// The values of the first set.
    #[must_use]
    pub fn data_labels(&self) -> Vec<Value> {
        self.dataset(DATA_LABELS).first_set().to_vec()
    }

    /// One font per value of the first set.
    #[must_use]
    pub fn data_fonts(&self) -> Vec<Font> {
        self.dataset(DATA_FONTS)
            .first_set()
            .iter()
            .map(|value| self.load_font(value.as_str()))
            .collect()
    }

    #[must_use]
    pub fn data_formats(&self) -> DataStyles {
        DataStyles::from_dataset(&self.dataset(DATA_FORMATS), &self.symbols)
    }

    fn raw(&self, name: &str) -> Option<&str> {
        self.properties.get(name).filter(|raw| !raw.is_empty())
    }

    fn load_color(&self, raw: &str) -> Color {
        let ds = Dataset::parse(raw, &self.symbols);
        Color::parse(ds.first_set()).unwrap_or_else(|err| {
            warn!(error = %err, "using default colour");
            DEFAULT_COLOR
        })
    }

    fn load_font(&self, raw: &str) -> Font {
        let ds = Dataset::parse(raw, &self.symbols);
        Font::parse(&ds).unwrap_or_else(|err| {
            warn!(error = %err, "using default font");
            Font::default()
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
