use crate::cli::DecodeArgs;
use crate::config::Config;
use crate::options::Options;
use crate::output::{
    ColorMode, DecodeReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::resolver::TableResolver;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{read_tables, report_error, write_output};

#[must_use]
pub fn run_decode(args: &DecodeArgs, color: ColorMode, options: &Options) -> i32 {
    match run_decode_impl(args, color, options) {
        Ok(output) => match write_output(&output, args.output.as_deref()) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                report_error(&e);
                EXIT_CONFIG_ERROR
            }
        },
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Decodes the property file named by `args` and formats the report.
///
/// # Errors
/// Returns an error if an input file cannot be read or the report cannot be
/// serialized.
pub fn run_decode_impl(args: &DecodeArgs, color: ColorMode, options: &Options) -> Result<String> {
    let (properties, symbols) = read_tables(&args.properties, args.symbols.as_deref())?;
    let mut config = Config::new(TableResolver::new(&options.resolver), &properties, &symbols);
    let report = DecodeReport::build(&mut config, args.resolve_fonts);

    match args.format {
        OutputFormat::Text => {
            let color = if args.output.is_some() {
                ColorMode::Never
            } else {
                color
            };
            TextFormatter::new(color).format(&report)
        }
        OutputFormat::Json => JsonFormatter::new().format(&report),
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
