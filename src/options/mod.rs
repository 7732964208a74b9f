//! Process options: logging and resolver tables, loaded from TOML.

mod loader;
mod model;
mod validation;

pub use loader::{FileOptionsLoader, FileSystem, OptionsLoader, RealFileSystem};
pub use model::{
    FontDefinition, FontEntry, LogLevel, LogOptions, Options, ResolverOptions, StyleEntry,
};
pub use validation::validate_options;
