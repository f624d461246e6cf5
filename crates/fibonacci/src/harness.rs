//! Fail-fast unit-test harness run by the `fibonacci-unit-tests` binary.
//!
//! Each group checks a fixed set of `(n, F(n))` pairs and prints one line
//! when all of them hold. The first mismatch panics.

use std::io::{self, Write};

use tracing::debug;

use fibonacci_core::{fibonacci, FibError};

/// A named batch of expected values.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub name: &'static str,
    pub cases: &'static [(i64, i64)],
}

/// The fixed battery, in the order it runs.
pub const GROUPS: [Group; 3] = [
    Group {
        name: "Base cases",
        cases: &[(0, 0), (1, 1)],
    },
    Group {
        name: "Small values",
        cases: &[(2, 1), (3, 2), (4, 3), (5, 5)],
    },
    Group {
        name: "Larger values",
        cases: &[(6, 8), (7, 13), (8, 21), (9, 34), (10, 55)],
    },
];

/// Run every group against `fibonacci`, writing progress to `out`.
pub fn run_all<W: Write>(out: &mut W) -> io::Result<()> {
    run_groups(fibonacci, out)
}

/// Run every group against `fib`.
///
/// # Panics
///
/// On the first case where `fib(n)` is not `Ok(expected)`.
pub fn run_groups<F, W>(fib: F, out: &mut W) -> io::Result<()>
where
    F: Fn(i64) -> Result<i64, FibError>,
    W: Write,
{
    writeln!(out, "Running Fibonacci unit tests...")?;
    for group in &GROUPS {
        for &(n, expected) in group.cases {
            debug!(group = group.name, n, expected, "checking");
            assert_eq!(fib(n), Ok(expected), "fibonacci({n}) should be {expected}");
        }
        writeln!(out, "{} passed", group.name)?;
    }
    writeln!(out, "All tests passed!")?;
    out.flush()
}
