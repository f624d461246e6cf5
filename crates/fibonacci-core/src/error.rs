//! Error type shared by the library and the CLI driver.

use crate::constants::MAX_BIG_FIB_INDEX;

/// Error type for Fibonacci calculations and input handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index is outside the sequence (negative).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The value does not fit in the fixed-width result type.
    #[error("F({0}) overflows a 64-bit signed integer")]
    Overflow(i64),

    /// The index is past the arbitrary-precision ceiling.
    #[error("F({0}) is too large to compute; the maximum index is {max}", max = MAX_BIG_FIB_INDEX)]
    TooLarge(i64),

    /// Standard input did not contain an integer.
    #[error("Error reading input: {0}")]
    Parse(String),
}
