use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pic-chart")]
#[command(author, version, about = "Decode chart configuration strings")]
#[command(long_about = "Decodes the property and symbol tables sent to a chart plug-in \
    and prints the typed chart data.\n\n\
    Property and symbol files hold one key=value pair per line; use '-' to read \
    properties from stdin.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to the options file (default: .pic-chart.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading the options file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a property file and print the chart data
    Decode(DecodeArgs),

    /// Print one property as a typed value
    Get(GetArgs),
}

#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Property file ('-' for stdin)
    pub properties: PathBuf,

    /// Symbol file
    #[arg(short, long)]
    pub symbols: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Resolve font references through the configured resolver tables
    #[arg(long)]
    pub resolve_fonts: bool,
}

/// How `get` interprets a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// The property text as stored, control characters named
    Raw,
    /// The symbol-resolved text without its type prefix
    #[default]
    Text,
    /// The data type of the value
    Type,
    Integer,
    Number,
    /// A length in 1/100ths of a twip
    Twiplet,
    Color,
    Font,
    Dataset,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Property file ('-' for stdin)
    pub properties: PathBuf,

    /// Property name
    pub name: String,

    /// Symbol file
    #[arg(short, long)]
    pub symbols: Option<PathBuf>,

    /// Interpretation of the property
    #[arg(long = "as", value_enum, default_value = "text")]
    pub kind: ValueKind,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
