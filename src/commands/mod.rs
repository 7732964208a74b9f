mod decode;
mod get;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub use decode::{run_decode, run_decode_impl};
pub use get::{format_value, run_get, run_get_impl};

use crate::cli::Cli;
use crate::options::{FileOptionsLoader, Options, OptionsLoader};
use crate::output::print_error_full;
use crate::{PicError, Result};

/// Path argument meaning "read standard input".
const STDIN_PATH: &str = "-";

/// Loads options as selected by the global flags.
///
/// # Errors
/// Returns an error if the options file cannot be read, parsed or validated.
pub fn load_options(cli: &Cli) -> Result<Options> {
    if cli.no_config {
        return Ok(Options::default());
    }
    let loader = FileOptionsLoader::new();
    match &cli.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Prints an error in the CLI error format.
pub fn report_error(err: &PicError) {
    print_error_full(err.error_type(), &err.message(), err.detail().as_deref(), None);
}

/// Reads the property text (or stdin for `-`) and the optional symbol text.
pub(crate) fn read_tables(properties: &Path, symbols: Option<&Path>) -> Result<(String, String)> {
    let properties = read_input(properties)?;
    let symbols = symbols.map(read_file).transpose()?.unwrap_or_default();
    Ok((properties, symbols))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() != STDIN_PATH {
        return read_file(path);
    }
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PicError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes to the output file, or stdout when there is none.
pub(crate) fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)?,
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
