use serde::Serialize;

use crate::color::Color;
use crate::dataset::Dataset;
use crate::datastyle::DataStyles;
use crate::font::Font;
use crate::value::Value;

/// The chart data properties, handed to the renderer as one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Data {
    pub values: Dataset,
    pub titles: Vec<Value>,
    pub colors: Vec<Color>,
    pub styles: DataStyles,
    pub labels: Vec<Value>,
    pub fonts: Vec<Font>,
    pub formats: DataStyles,
}

impl Data {
    /// Number of series in the values dataset.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.values.len()
    }

    /// Title of a series; empty when there is none.
    #[must_use]
    pub fn title(&self, series: usize) -> &Value {
        self.titles.get(series).unwrap_or(Value::empty())
    }

    /// Colour of a series or point, cycling when there are fewer colours.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()])
    }
}
