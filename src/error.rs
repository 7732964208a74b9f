use std::path::PathBuf;

use thiserror::Error;

use crate::guid::Guid;

#[derive(Error, Debug)]
pub enum PicError {
    #[error("invalid GUID format '{0}'")]
    InvalidGuid(String),

    #[error("invalid GUID char '{0}'")]
    InvalidGuidChar(char),

    #[error("invalid color set {0:?}")]
    InvalidColorSet(Vec<String>),

    #[error("invalid font value '{0}'")]
    InvalidFont(String),

    #[error("invalid font set: expected {expected} rows, got {actual}")]
    InvalidFontSet { expected: usize, actual: usize },

    #[error("invalid boolean '{0}'")]
    InvalidBool(String),

    #[error("invalid integer format '{0}'")]
    InvalidInteger(String),

    #[error("invalid number format '{0}'")]
    InvalidNumber(String),

    #[error("font not found for guid {0}")]
    FontNotFound(Guid),

    #[error("style not found for guid {0}")]
    StyleNotFound(Guid),

    #[error("default font not found")]
    DefaultFontNotFound,

    #[error("Error rendering chart: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PicError {
    /// Short category name used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidGuid(_)
            | Self::InvalidGuidChar(_)
            | Self::InvalidColorSet(_)
            | Self::InvalidFont(_)
            | Self::InvalidFontSet { .. }
            | Self::InvalidBool(_) => "Decode",
            Self::InvalidInteger(_)
            | Self::InvalidNumber(_)
            | Self::FontNotFound(_)
            | Self::StyleNotFound(_)
            | Self::DefaultFontNotFound => "Resolve",
            Self::Render(_) => "Render",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// The message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Render(msg) | Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PicError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
