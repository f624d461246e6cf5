//! # fibonacci-core
//!
//! The Fibonacci function used by the `fibonacci` CLI driver and its
//! unit-test harness, plus a lazy sequence iterator and an
//! arbitrary-precision variant for indices past the `i64` range.

pub mod calculator;
pub mod constants;
pub mod error;
pub mod iterator;

// Re-exports
pub use calculator::{fibonacci, fibonacci_big};
pub use constants::{exit_codes, FIB_TABLE, MAX_BIG_FIB_INDEX, MAX_FIB_INDEX};
pub use error::FibError;
pub use iterator::FibIterator;
