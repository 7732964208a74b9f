//! Decoded property values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ascii::ESC;

/// Data field type carried by an escape-coded value.
///
/// Discriminants match the host's data type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum DataType {
    NotSet = -1,
    Neutral = 0,
    Integer = 1,
    Number = 2,
    Date = 3,
    Time = 4,
    Currency = 5,
}

impl DataType {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotSet => "NotSet",
            Self::Neutral => "Neutral",
            Self::Integer => "Integer",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Currency => "Currency",
        };
        f.write_str(name)
    }
}

/// The value of a property from the configuration.
///
/// A value may start with `ESC` followed by a tag letter giving its data type;
/// [`Value::text`] strips that prefix for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

static EMPTY: Value = Value(String::new());

impl Value {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A shared empty value, returned by accessors that hand out references.
    #[must_use]
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// The raw text including any escape prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the value type encoded in the escape prefix.
    ///
    /// Values without a prefix are [`DataType::Neutral`]. An unknown tag letter
    /// is logged and yields [`DataType::NotSet`].
    #[must_use]
    pub fn data_type(&self) -> DataType {
        let Some(tag) = self.escape_tag() else {
            return DataType::Neutral;
        };
        match tag {
            'i' => DataType::Integer,
            'n' => DataType::Number,
            'd' => DataType::Date,
            't' => DataType::Time,
            '$' => DataType::Currency,
            other => {
                tracing::warn!(tag = %other, "unrecognised value type");
                DataType::NotSet
            }
        }
    }

    /// Converts the value to displayable text by removing the escape
    /// sequence identifying the value type.
    #[must_use]
    pub fn text(&self) -> &str {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(ESC), Some(_)) => chars.as_str(),
            _ => &self.0,
        }
    }

    /// Whether a boolean value is true. Only the exact text `true` qualifies.
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.0 == "true"
    }

    fn escape_tag(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(ESC), Some(tag)) => Some(tag),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
