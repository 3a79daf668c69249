// vidmeta-cli/src/main.rs
//
// Entry point for the `vidmeta` binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Installing the env_logger backend.
// - Dispatching to the selected subcommand.
// - Printing errors and setting the process exit code.

use clap::Parser;
use std::process;
use vidmeta_cli::{Cli, Commands, logging, output, run_analyze, run_merge, run_version};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Merge(args) => run_merge(args),
        Commands::Version(args) => run_version(args),
    };

    if let Err(e) = result {
        log::debug!("Command failed: {:?}", e);
        output::print_error(&e.to_string());
        process::exit(1);
    }
}
