//! Property-based tests for the Fibonacci function.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibonacci_core::{fibonacci, fibonacci_big, FibError, FibIterator, MAX_FIB_INDEX};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// F(k) == F(k-1) + F(k-2) across the representable range.
    #[test]
    fn fibonacci_recurrence(k in 2i64..=MAX_FIB_INDEX) {
        let fk = fibonacci(k).unwrap();
        let fk1 = fibonacci(k - 1).unwrap();
        let fk2 = fibonacci(k - 2).unwrap();
        prop_assert_eq!(fk, fk1 + fk2, "F({}) != F({}) + F({})", k, k - 1, k - 2);
    }

    /// The arbitrary-precision variant agrees with the fixed-width one.
    #[test]
    fn big_agrees_with_fixed(n in 0u64..=92) {
        let fixed = fibonacci(i64::try_from(n).unwrap()).unwrap();
        prop_assert_eq!(fibonacci_big(n), BigUint::from(u64::try_from(fixed).unwrap()));
    }

    /// Recurrence holds for the arbitrary-precision variant beyond i64.
    #[test]
    fn big_recurrence(n in 0u64..2000) {
        prop_assert_eq!(fibonacci_big(n) + fibonacci_big(n + 1), fibonacci_big(n + 2));
    }

    /// Every negative index is rejected.
    #[test]
    fn negative_rejected(n in i64::MIN..0) {
        prop_assert!(matches!(fibonacci(n), Err(FibError::InvalidInput(_))));
    }

    /// Every index past F(92) overflows.
    #[test]
    fn past_range_overflows(n in (MAX_FIB_INDEX + 1)..i64::MAX) {
        prop_assert_eq!(fibonacci(n), Err(FibError::Overflow(n)));
    }
}

/// The iterator yields exactly what the function returns.
#[test]
fn iterator_matches_function() {
    let mut count = 0;
    for (n, value) in FibIterator::new() {
        assert_eq!(fibonacci(n), Ok(value), "iterator disagrees at n={n}");
        count += 1;
    }
    assert_eq!(count, MAX_FIB_INDEX + 1);
}
