//! Length measurements in 1/100ths of a twip.

use serde::{Deserialize, Serialize};

/// A unit of measure in 1/100ths of a twip.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Twiplet(pub i32);

/// The number of twiplets in one inch.
pub const INCH: f64 = 144_000.0;

impl Twiplet {
    #[must_use]
    pub fn inches(self) -> f64 {
        f64::from(self.0) / INCH
    }

    /// Converts the measurement to pixels at `dpi`, rounding half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixels(self, dpi: i32) -> i64 {
        (self.inches() * f64::from(dpi)).round() as i64
    }
}

impl From<i32> for Twiplet {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
