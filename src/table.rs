//! `key=value` tables and symbol substitution.

use indexmap::IndexMap;

use crate::ascii::DLE;

/// Name to raw text mapping parsed from `key=value` lines.
///
/// Lines are split on the first `=`; lines without one are dropped. A repeated
/// key keeps its first position but takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsTable {
    entries: IndexMap<String, String>,
}

impl SettingsTable {
    /// Parses `input` as `separator`-delimited lines, trimming carriage returns.
    #[must_use]
    pub fn parse(input: &str, separator: char) -> Self {
        let entries = input
            .split(separator)
            .filter_map(|line| line.trim_matches('\r').split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    /// Parses newline-separated lines.
    #[must_use]
    pub fn from_lines(input: &str) -> Self {
        Self::parse(input, '\n')
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Symbol table referenced from property values by a leading `DLE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable(SettingsTable);

impl SymbolTable {
    #[must_use]
    pub fn from_lines(input: &str) -> Self {
        Self(SettingsTable::from_lines(input))
    }

    /// Substitutes a symbol reference with its text.
    ///
    /// Tokens without the `DLE` marker are returned unchanged. A reference to a
    /// missing symbol resolves to the empty string.
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        match token.strip_prefix(DLE) {
            Some(name) => self.0.get(name).unwrap_or_default(),
            None => token,
        }
    }

    #[must_use]
    pub const fn table(&self) -> &SettingsTable {
        &self.0
    }
}

impl From<SettingsTable> for SymbolTable {
    fn from(table: SettingsTable) -> Self {
        Self(table)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
