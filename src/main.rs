use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tokenhue::{Cli, ExportConfig, log_init};

fn main() -> ExitCode {
    let cli = Cli::parse();
    log_init::init_logger(cli.verbose);

    match ExportConfig::from_cli(&cli).and_then(|config| tokenhue::run(&config)) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
