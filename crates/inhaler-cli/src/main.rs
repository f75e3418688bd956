//! Inhaler directory CLI.

use clap::Parser;
use inhaler_cli::logging::init_logging;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_devices, run_list, run_scales, run_score};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::List(args) => run_list(args),
        Command::Devices(args) => run_devices(args),
        Command::Scales => run_scales(),
        Command::Score(args) => run_score(args),
    };
    if let Err(error) = outcome {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
