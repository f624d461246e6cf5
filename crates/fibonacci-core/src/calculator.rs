//! The Fibonacci function and its arbitrary-precision counterpart.
//!
//! `fibonacci` works on `i64` and reports negative or overflowing indices as
//! errors. `fibonacci_big` uses `BigUint` and is defined for every `u64` index.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

use crate::constants::MAX_FIB_INDEX;
use crate::error::FibError;

/// Compute F(n) iteratively with checked arithmetic.
///
/// # Example
/// ```
/// assert_eq!(fibonacci_core::fibonacci(10), Ok(55));
/// assert!(fibonacci_core::fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<i64, FibError> {
    if n < 0 {
        return Err(FibError::InvalidInput(format!(
            "n must be non-negative, got {n}"
        )));
    }
    if n > MAX_FIB_INDEX {
        return Err(FibError::Overflow(n));
    }

    if n == 0 {
        return Ok(0);
    }

    // Stop at F(n); stepping once more would overflow at n = 92.
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 1..n {
        let next = a.checked_add(b).ok_or(FibError::Overflow(n))?;
        a = b;
        b = next;
    }
    trace!(n, value = b, "computed fibonacci");
    Ok(b)
}

/// Compute F(n) as an arbitrary-precision integer.
///
/// # Example
/// ```
/// assert_eq!(fibonacci_core::fibonacci_big(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
pub fn fibonacci_big(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    trace!(n, bits = a.bits(), "computed big fibonacci");
    a
}
