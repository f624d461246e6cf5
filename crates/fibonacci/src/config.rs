//! Application configuration from CLI flags.

use clap::Parser;

/// Reads an index n from standard input and prints the nth Fibonacci number.
#[derive(Parser, Debug, Default)]
#[command(name = "fibonacci", version, about)]
pub struct AppConfig {}

impl AppConfig {
    /// Parse CLI arguments, exiting on `--help`, `--version`, or unknown flags.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
