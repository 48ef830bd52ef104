//! CLI entry point for themed texture pack generation

use clap::Parser;
use palettepack::io::cli::{Cli, PackGenerator};
use palettepack::io::configuration::DEFAULT_LOG_FILTER;
use std::process::ExitCode;

// Allow print for the single failure report and the completion message
#[allow(clippy::print_stderr, clippy::print_stdout)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let mut generator = PackGenerator::new(cli);
    match generator.process() {
        Ok(report) => {
            log::info!("Pack written to {}", report.pack_root.display());
            println!("Done! :)");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
