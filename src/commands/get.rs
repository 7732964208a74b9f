use tracing::warn;

use crate::cli::{GetArgs, ValueKind};
use crate::config::Config;
use crate::options::Options;
use crate::output::{display_value, escape_controls, format_color, format_font};
use crate::resolver::TableResolver;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{read_tables, report_error};

#[must_use]
pub fn run_get(args: &GetArgs, options: &Options) -> i32 {
    match run_get_impl(args, options) {
        Ok(line) => {
            println!("{line}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Reads one property and formats it as `args.kind`.
///
/// # Errors
/// Returns an error if an input file cannot be read.
pub fn run_get_impl(args: &GetArgs, options: &Options) -> Result<String> {
    let (properties, symbols) = read_tables(&args.properties, args.symbols.as_deref())?;
    let config = Config::new(TableResolver::new(&options.resolver), &properties, &symbols);
    if config.properties().get(&args.name).is_none() {
        warn!(property = %args.name, "property not set");
    }
    Ok(format_value(&config, &args.name, args.kind))
}

/// One property rendered as a single line.
#[must_use]
pub fn format_value(config: &Config<'_>, name: &str, kind: ValueKind) -> String {
    match kind {
        ValueKind::Raw => escape_controls(config.properties().get(name).unwrap_or_default()),
        ValueKind::Text => display_value(&config.value(name)),
        ValueKind::Type => config.value(name).data_type().to_string(),
        ValueKind::Integer => config.integer(name).to_string(),
        ValueKind::Number => config.number(name).to_string(),
        ValueKind::Twiplet => {
            let length = config.twiplet(name);
            format!("{} ({:.3} in)", length.0, length.inches())
        }
        ValueKind::Color => format_color(&config.color(name)),
        ValueKind::Font => format_font(&config.font(name)),
        ValueKind::Dataset => config
            .dataset(name)
            .iter()
            .map(|set| {
                set.iter()
                    .map(display_value)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

#[cfg(test)]
#[path = "get_tests.rs"]
mod tests;
