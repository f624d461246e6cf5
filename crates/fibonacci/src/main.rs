//! fibonacci — print the nth Fibonacci number for an index read from stdin.

use std::process::ExitCode;

use fibonacci_core::exit_codes;
use fibonacci_lib::{app, config, logging};

fn main() -> ExitCode {
    logging::init();

    // Only --help and --version; the index comes from stdin.
    config::AppConfig::parse();

    match app::run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(exit_codes::ERROR_GENERIC)
        }
    }
}
