use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::{Color, DEFAULT_COLOR};
use crate::font::{FontAttributes, FontResource, FontStyle};
use crate::guid::Guid;
use crate::resolver::NumberFormat;

/// Options for one process: logging and the resolver tables.
///
/// ```toml
/// [log]
/// level = "info"
/// file = "pic-chart.log"
///
/// [resolver.number_format]
/// thousands_separator = "."
/// decimal_point = ","
///
/// [[resolver.fonts]]
/// guid = "CAFE000000000000000000000000F00D"
/// typeface = "Arial"
/// point_size = 10.0
/// bold = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Options {
    #[serde(default)]
    pub log: LogOptions,

    #[serde(default)]
    pub resolver: ResolverOptions,
}

impl Options {
    /// Determines whether info level logging is enabled.
    #[must_use]
    pub fn log_info(&self) -> bool {
        self.log.level == LogLevel::Info
    }
}

/// Which information will be logged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failures and fallbacks only.
    #[default]
    Errors,
    /// Also request and response summaries.
    Info,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogOptions {
    #[serde(default)]
    pub level: LogLevel,

    /// Log file; logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Tables served by [`crate::resolver::TableResolver`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolverOptions {
    #[serde(default)]
    pub number_format: NumberFormat,

    /// Font returned for the zero GUID.
    #[serde(default)]
    pub default_font: Option<FontDefinition>,

    #[serde(default)]
    pub fonts: Vec<FontEntry>,

    #[serde(default)]
    pub styles: Vec<StyleEntry>,
}

/// A font resource as written in the options file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontDefinition {
    pub typeface: String,

    #[serde(default = "default_point_size")]
    pub point_size: f64,

    #[serde(default)]
    pub bold: bool,

    #[serde(default)]
    pub italic: bool,

    #[serde(default)]
    pub emulate_bold: bool,

    #[serde(default)]
    pub emulate_italic: bool,

    #[serde(default)]
    pub emulate_typeface: bool,

    /// Path of the font file.
    #[serde(default)]
    pub file: String,
}

const fn default_point_size() -> f64 {
    10.0
}

impl FontDefinition {
    #[must_use]
    pub fn to_resource(&self) -> FontResource {
        let flags = [
            (self.bold, FontAttributes::BOLD),
            (self.italic, FontAttributes::ITALIC),
            (self.emulate_bold, FontAttributes::EMULATE_BOLD),
            (self.emulate_italic, FontAttributes::EMULATE_ITALIC),
            (self.emulate_typeface, FontAttributes::EMULATE_TYPEFACE),
        ];
        let attributes = flags
            .into_iter()
            .filter(|(set, _)| *set)
            .fold(FontAttributes::NONE, |acc, (_, flag)| acc | flag);
        FontResource {
            typeface: self.typeface.clone(),
            point_size: self.point_size,
            attributes,
            file_name: self.file.clone(),
        }
    }
}

/// `[[resolver.fonts]]`: a font resource keyed by GUID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontEntry {
    pub guid: Guid,

    #[serde(flatten)]
    pub font: FontDefinition,
}

/// `[[resolver.styles]]`: a font style keyed by GUID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleEntry {
    pub guid: Guid,

    pub font: FontDefinition,

    #[serde(default = "default_color")]
    pub color: Color,

    #[serde(default)]
    pub underline: bool,
}

const fn default_color() -> Color {
    DEFAULT_COLOR
}

impl StyleEntry {
    #[must_use]
    pub fn to_style(&self) -> FontStyle {
        FontStyle::new(self.font.to_resource(), self.color, self.underline)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
