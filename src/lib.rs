//! Decoder for the configuration strings of a plug-in chart API.
//!
//! The host sends a property table and a symbol table as `key=value` lines.
//! [`Config`] decodes them into typed values and the [`Data`] snapshot used
//! for rendering, asking a [`Resolver`] for locale conversions and fonts.

pub mod ascii;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod data;
pub mod dataset;
pub mod datastyle;
pub mod error;
pub mod font;
pub mod guid;
pub mod host;
pub mod logging;
pub mod options;
pub mod output;
pub mod resolver;
pub mod table;
pub mod twiplet;
pub mod value;

pub use color::{Color, DEFAULT_COLOR, NamedColor};
pub use config::Config;
pub use data::Data;
pub use dataset::Dataset;
pub use datastyle::{DataStyle, DataStyles};
pub use error::{PicError, Result};
pub use font::{Font, FontAttributes, FontResource, FontStyle};
pub use guid::Guid;
pub use resolver::{NumberFormat, Resolver, TableResolver};
pub use twiplet::Twiplet;
pub use value::{DataType, Value};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
