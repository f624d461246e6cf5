#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibonacci_core::{fibonacci, fibonacci_big, FibError, MAX_FIB_INDEX};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    match fibonacci(n) {
        Ok(v) => {
            let index = u64::try_from(n).expect("Ok result for negative n");
            let expected = fibonacci_big(index);
            assert_eq!(BigUint::from(v.unsigned_abs()), expected, "fixed != big at n={n}");
        }
        Err(FibError::InvalidInput(_)) => assert!(n < 0),
        Err(FibError::Overflow(m)) => {
            assert_eq!(m, n);
            assert!(n > MAX_FIB_INDEX);
        }
        Err(e) => panic!("unexpected error at n={n}: {e}"),
    }
});
