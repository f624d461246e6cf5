//! Lazy Fibonacci iterator using the standard additive recurrence.

use std::iter::FusedIterator;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0) and stops after
/// F(92), the last value that fits in an `i64`.
///
/// # Example
/// ```
/// use fibonacci_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    a: Option<i64>,
    b: Option<i64>,
    index: i64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: Some(0),
            b: Some(1),
            index: 0,
        }
    }

    /// Start iteration from a specific index.
    ///
    /// Past the end of the representable range the iterator is empty.
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let mut iter = Self::new();
        for _ in 0..n {
            if iter.next().is_none() {
                break;
            }
        }
        iter
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.a?;
        let idx = self.index;
        // The lookahead may overflow one step before the current value does.
        let next = self.b.and_then(|b| val.checked_add(b));
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
        Some((idx, val))
    }
}

impl FusedIterator for FibIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, MAX_FIB_INDEX};

    #[test]
    fn first_ten() {
        let vals: Vec<i64> = FibIterator::new().take(10).map(|(_, v)| v).collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn yields_correct_indices() {
        let indices: Vec<i64> = FibIterator::new().take(5).map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn from_index_skips() {
        let (idx, val) = FibIterator::from_index(10).next().unwrap();
        assert_eq!(idx, 10);
        assert_eq!(val, 55);
    }

    #[test]
    fn stops_at_last_representable_value() {
        let all: Vec<(i64, i64)> = FibIterator::new().collect();
        assert_eq!(all.len(), FIB_TABLE.len());
        assert_eq!(all.last(), Some(&(MAX_FIB_INDEX, FIB_TABLE[92])));
    }

    #[test]
    fn stays_exhausted() {
        let mut iter = FibIterator::from_index(93);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(FibIterator::from_index(500).next(), None);
    }
}
