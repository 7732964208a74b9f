use serde::Serialize;

use crate::ascii::ESC;
use crate::config::{Config, DATA_FONTS};
use crate::data::Data;
use crate::font::{Font, FontStyle};
use crate::resolver::NumberFormat;
use crate::value::{DataType, Value};

/// One property after symbol resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    pub value: Value,
    pub data_type: DataType,
}

/// A font reference and what the resolver made of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFont {
    /// Property name, or `data.fonts[i]`.
    pub source: String,
    pub font: Font,
    pub style: FontStyle,
}

/// Everything `decode` prints for one property file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    pub name: String,
    pub number_format: NumberFormat,
    pub properties: Vec<PropertyEntry>,
    pub data: Data,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<ResolvedFont>,
}

impl DecodeReport {
    /// Decodes every property of `config`.
    ///
    /// With `resolve_fonts`, every font property and every entry of
    /// `data.fonts` is resolved through the config's resolver.
    pub fn build(config: &mut Config<'_>, resolve_fonts: bool) -> Self {
        let properties = config
            .properties()
            .iter()
            .map(|(name, _)| {
                let value = config.value(name);
                PropertyEntry {
                    name: name.to_string(),
                    data_type: value.data_type(),
                    value,
                }
            })
            .collect();
        let data = config.data();

        let fonts = if resolve_fonts {
            Self::resolve_fonts(config, &data)
        } else {
            Vec::new()
        };

        Self {
            name: config.name(),
            number_format: config.number_format(),
            properties,
            data,
            fonts,
        }
    }

    fn resolve_fonts(config: &mut Config<'_>, data: &Data) -> Vec<ResolvedFont> {
        let font_tag: String = [ESC, 'f'].iter().collect();
        let named: Vec<(String, Font)> = config
            .properties()
            .iter()
            .filter(|(name, raw)| *name != DATA_FONTS && raw.starts_with(&font_tag))
            .map(|(name, _)| (name.to_string(), config.font(name)))
            .collect();
        let listed = data
            .fonts
            .iter()
            .enumerate()
            .filter(|(_, font)| **font != Font::default())
            .map(|(i, font)| (format!("{DATA_FONTS}[{i}]"), *font));

        named
            .into_iter()
            .chain(listed)
            .map(|(source, font)| ResolvedFont {
                style: config.resolve_font(&font),
                source,
                font,
            })
            .collect()
    }
}
