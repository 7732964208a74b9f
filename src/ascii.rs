//! ASCII control codes used in the configuration settings.

/// Start Of Heading: switches a dataset to control-byte delimiters.
pub const SOH: char = '\u{01}';
/// Start of Text: conventional pair delimiter inside data style settings.
pub const STX: char = '\u{02}';
/// Data Link Escape: marks a symbol table reference.
pub const DLE: char = '\u{10}';
/// Escape: marks a typed value (`ESC i`, `ESC n`, ...) or a font (`ESC f`).
pub const ESC: char = '\u{1b}';
/// Record Separator: delimits sets in a control-byte dataset.
pub const RS: char = '\u{1e}';
/// Unit Separator: delimits values in a control-byte dataset.
pub const US: char = '\u{1f}';
