mod app;
mod cli;
mod config;
mod prompt;
mod report;

use clap::Parser;
use frames_logging::LogDestination;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    frames_logging::initialize(frames_logging::level_for_verbosity(cli.verbose), destination);

    app::run(&cli)
}
