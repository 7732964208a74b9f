//! Dataset tokenizer.
//!
//! A dataset is a list of sets, each a list of values. Two delimiter regimes exist:
//! - `set|set` with `value,value` inside a set (the default, human-readable form)
//! - a leading `SOH`, then `RS` between sets and `US` between values (generated data,
//!   which may contain literal commas and pipes)
//!
//! Every token may be a symbol reference. A symbol whose text contains the value
//! delimiter expands into several values in place.

use std::ops::Index;

use serde::Serialize;

use crate::ascii::{RS, SOH, US};
use crate::table::SymbolTable;
use crate::value::Value;

/// Set and value delimiters of one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub set: char,
    pub value: char,
}

impl Delimiters {
    pub const DEFAULT: Self = Self {
        set: '|',
        value: ',',
    };

    pub const CONTROL: Self = Self { set: RS, value: US };

    /// Picks the regime for `input` and returns the input left to tokenize.
    #[must_use]
    pub fn detect(input: &str) -> (Self, &str) {
        input
            .strip_prefix(SOH)
            .map_or((Self::DEFAULT, input), |rest| (Self::CONTROL, rest))
    }
}

/// A two-dimensional set of data values, indexed `[set][value]`.
///
/// Never empty: there is always at least one set holding at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    sets: Vec<Vec<Value>>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl Dataset {
    /// One set containing one empty value.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sets: vec![vec![Value::default()]],
        }
    }

    /// Tokenizes `input`, resolving symbol references against `symbols`.
    #[must_use]
    pub fn parse(input: &str, symbols: &SymbolTable) -> Self {
        let (delims, body) = Delimiters::detect(input);
        let sets = body
            .split(delims.set)
            .map(|set| {
                set.split(delims.value)
                    .flat_map(|token| symbols.resolve(token).split(delims.value))
                    .map(Value::from)
                    .collect()
            })
            .collect();
        Self { sets }
    }

    /// Number of sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    #[must_use]
    pub fn set(&self, index: usize) -> Option<&[Value]> {
        self.sets.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, set: usize, value: usize) -> Option<&Value> {
        self.sets.get(set).and_then(|s| s.get(value))
    }

    #[must_use]
    pub fn first_set(&self) -> &[Value] {
        &self.sets[0]
    }

    /// The first cell of the dataset.
    #[must_use]
    pub fn first(&self) -> &Value {
        &self.sets[0][0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Value]> {
        self.sets.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn sets(&self) -> &[Vec<Value>] {
        &self.sets
    }

    #[must_use]
    pub fn into_sets(self) -> Vec<Vec<Value>> {
        self.sets
    }
}

impl Index<usize> for Dataset {
    type Output = [Value];

    fn index(&self, index: usize) -> &Self::Output {
        &self.sets[index]
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
