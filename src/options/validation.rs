use std::collections::HashSet;

use crate::{PicError, Result};

use super::Options;

/// Checks the options for mistakes TOML parsing cannot catch.
///
/// # Errors
/// Returns an error if the number separators clash or are digits, or a GUID is
/// listed twice in the same table.
pub fn validate_options(options: &Options) -> Result<()> {
    let nf = options.resolver.number_format;
    if nf.thousands_separator == nf.decimal_point {
        return Err(PicError::Config(format!(
            "resolver.number_format: thousands separator and decimal point are both '{}'",
            nf.decimal_point
        )));
    }
    for (name, c) in [
        ("thousands_separator", nf.thousands_separator),
        ("decimal_point", nf.decimal_point),
    ] {
        if c.is_ascii_digit() || c == '-' || c == '+' {
            return Err(PicError::Config(format!(
                "resolver.number_format.{name} cannot be '{c}'"
            )));
        }
    }

    let mut seen = HashSet::new();
    if let Some(entry) = options.resolver.fonts.iter().find(|e| !seen.insert(e.guid)) {
        return Err(PicError::Config(format!(
            "resolver.fonts: duplicate guid {}",
            entry.guid
        )));
    }

    let mut seen = HashSet::new();
    if let Some(entry) = options.resolver.styles.iter().find(|e| !seen.insert(e.guid)) {
        return Err(PicError::Config(format!(
            "resolver.styles: duplicate guid {}",
            entry.guid
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
