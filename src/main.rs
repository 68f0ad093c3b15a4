use clap::Parser;
use std::process::ExitCode;
use tidyup::cli::{Cli, run_cli};
use tidyup::output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tidyup=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    // The layout root is wherever the program is run from.
    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            OutputFormatter::error(&format!("Error: cannot determine working directory: {}", e));
            return ExitCode::FAILURE;
        }
    };

    match run_cli(&root) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
