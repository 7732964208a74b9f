//! Diagnostic output through `tracing`.
//!
//! Library code only emits events; the binary installs the subscriber once.

use std::fs::File;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::options::{LogLevel, LogOptions};
use crate::{PicError, Result};

/// Most detailed level to emit for the options and command-line flags.
///
/// `-q` keeps errors only. `-v` raises the level to info and `-vv` to debug.
#[must_use]
pub fn max_level(options: &LogOptions, verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    let base = match options.level {
        LogLevel::Errors => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
    };
    let from_flags = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    base.max(from_flags)
}

/// Installs the global subscriber. `RUST_LOG` directives are honoured on top
/// of the computed level.
///
/// Logs go to `options.file` when set, without ANSI colours, and to stderr
/// otherwise. Installing twice is harmless.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(options: &LogOptions, verbose: u8, quiet: bool) -> Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive(max_level(options, verbose, quiet).into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // `try_init` only fails when a subscriber is already installed.
    match &options.file {
        Some(path) => {
            let file = File::create(path).map_err(|source| {
                PicError::Config(format!(
                    "cannot create log file {}: {source}",
                    path.display()
                ))
            })?;
            let _ = builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
