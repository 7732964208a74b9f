use clap::Parser;

use pic_chart::EXIT_CONFIG_ERROR;
use pic_chart::cli::{Cli, Commands};
use pic_chart::commands::{load_options, report_error, run_decode, run_get};
use pic_chart::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            report_error(&e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    if let Err(e) = init_logging(&options.log, cli.verbose, cli.quiet) {
        report_error(&e);
        std::process::exit(EXIT_CONFIG_ERROR);
    }

    let exit_code = match &cli.command {
        Commands::Decode(args) => run_decode(args, cli.color.into(), &options),
        Commands::Get(args) => run_get(args, &options),
    };

    std::process::exit(exit_code);
}
