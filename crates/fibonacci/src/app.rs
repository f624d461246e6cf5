//! CLI driver: read an index from standard input, print F(n).

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use num_bigint::BigUint;
use tracing::debug;

use fibonacci_core::{fibonacci, fibonacci_big, FibError, MAX_BIG_FIB_INDEX};

/// A computed Fibonacci value, fixed-width when it fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FibValue {
    Fixed(i64),
    Big(BigUint),
}

impl fmt::Display for FibValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "{v}"),
            Self::Big(v) => write!(f, "{v}"),
        }
    }
}

/// Run the driver against the process's stdin and stdout.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(stdin.lock(), stdout.lock())
}

/// Read one index from `input`, write its Fibonacci number to `output`.
pub fn run_with_io<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let n = read_index(&mut input)?;
    debug!(n, "read index");

    let value = compute(n)?;
    writeln!(output, "{value}").context("failed to write result")?;
    output.flush().context("failed to flush standard output")?;
    Ok(())
}

/// Read the first whitespace-delimited token and parse it as an `i64`.
///
/// Blank lines are skipped; anything after the first token is ignored.
pub fn read_index<R: BufRead>(input: &mut R) -> Result<i64, FibError> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| FibError::Parse(e.to_string()))?;
        if read == 0 {
            return Err(FibError::Parse("no integer on standard input".into()));
        }
        if let Some(token) = line.split_whitespace().next() {
            return parse_index(token);
        }
    }
}

fn parse_index(token: &str) -> Result<i64, FibError> {
    token
        .parse::<i64>()
        .map_err(|e| FibError::Parse(format!("expected an integer, got {token:?} ({e})")))
}

/// Compute F(n), switching to arbitrary precision past the `i64` range.
///
/// Indices above `MAX_BIG_FIB_INDEX` are refused with `FibError::TooLarge`.
pub fn compute(n: i64) -> Result<FibValue, FibError> {
    match fibonacci(n) {
        Ok(v) => Ok(FibValue::Fixed(v)),
        Err(FibError::Overflow(_)) => {
            debug!(n, "value exceeds i64, using arbitrary precision");
            let index = u64::try_from(n)
                .map_err(|_| FibError::InvalidInput(format!("n must be non-negative, got {n}")))?;
            if index > MAX_BIG_FIB_INDEX {
                return Err(FibError::TooLarge(n));
            }
            Ok(FibValue::Big(fibonacci_big(index)))
        }
        Err(e) => Err(e),
    }
}
