//! Main entry point for histshrink.
//!
//! Parses arguments, initializes logging, compacts the history file and
//! prints a one-line summary. Any failure is reported on stderr with exit
//! code 1.

use std::process::ExitCode;

use clap::Parser;

use histshrink::cli::{self, Cli};
use histshrink::utils::logger::{self, LogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging before anything else
    let _log_guards = match logger::init_logging(&LogConfig {
        verbosity: cli.verbose,
        log_dir: cli.log_dir.clone(),
    }) {
        Ok(guards) => guards,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = cli::run(&cli).and_then(|summary| cli::render_summary(&summary, cli.format));
    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
