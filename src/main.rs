mod cli;
mod logging;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Solvent accessible surface area with the Shrake-Rupley method
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all logging
    #[arg(long, global = true)]
    quiet: bool,

    /// Also write the log to this file
    #[arg(long = "log-file", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute per-atom solvent accessible surface areas
    Sasa(cli::sasa::Args),
    /// Write the unit sphere points used for sampling
    Sphere(cli::sphere::Args),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    let res = match &cli.command {
        Commands::Sasa(args) => cli::sasa::run(args),
        Commands::Sphere(args) => cli::sphere::run(args),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
