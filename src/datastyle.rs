//! Per-value style and format settings.

use indexmap::IndexMap;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::table::{SettingsTable, SymbolTable};
use crate::value::Value;

/// Setting holding the format of a `custom` data format.
pub const CUSTOM_FORMAT_SETTING: &str = "customFmt";

/// A style to apply to a data value, e.g. `line:+style=dash+width=3600`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataStyle {
    #[serde(rename = "type")]
    pub kind: String,
    pub settings: IndexMap<String, Value>,
}

impl DataStyle {
    /// Decodes `kind:` optionally followed by settings.
    ///
    /// The first character after the colon separates the `name=value` settings.
    /// Setting values are symbol-resolved. Text without a colon is an empty style.
    #[must_use]
    pub fn parse(raw: &str, symbols: &SymbolTable) -> Self {
        let Some((kind, blob)) = raw.split_once(':') else {
            return Self::default();
        };
        let mut chars = blob.chars();
        let settings = chars.next().map_or_else(IndexMap::new, |separator| {
            SettingsTable::parse(chars.as_str(), separator)
                .iter()
                .map(|(name, value)| (name.to_string(), Value::from(symbols.resolve(value))))
                .collect()
        });
        Self {
            kind: kind.to_string(),
            settings,
        }
    }

    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }
}

/// A set of styles to apply to the data values, indexed `[series][point]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DataStyles(Vec<Vec<DataStyle>>);

impl DataStyles {
    /// Decodes every cell of a dataset as a [`DataStyle`].
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, symbols: &SymbolTable) -> Self {
        Self(
            dataset
                .iter()
                .map(|set| {
                    set.iter()
                        .map(|v| DataStyle::parse(v.as_str(), symbols))
                        .collect()
                })
                .collect(),
        )
    }

    /// Number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[DataStyle]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Returns the data style of a particular data value.
    #[must_use]
    pub fn at(&self, series: usize, point: usize) -> Option<&DataStyle> {
        self.0.get(series).and_then(|s| s.get(point))
    }

    /// A named setting of a data value; empty when the value or setting is absent.
    #[must_use]
    pub fn setting(&self, series: usize, point: usize, name: &str) -> &Value {
        self.at(series, point)
            .and_then(|style| style.setting(name))
            .unwrap_or(Value::empty())
    }

    /// The custom format of a data value. Only styles of type `custom` have one.
    #[must_use]
    pub fn custom_format(&self, series: usize, point: usize) -> &Value {
        self.at(series, point)
            .filter(|style| style.kind == "custom")
            .and_then(|style| style.setting(CUSTOM_FORMAT_SETTING))
            .unwrap_or(Value::empty())
    }
}

#[cfg(test)]
#[path = "datastyle_tests.rs"]
mod tests;
