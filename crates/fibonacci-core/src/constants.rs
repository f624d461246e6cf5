//! Fibonacci limits and process exit codes.

/// Largest Fibonacci index whose value fits in an `i64`.
/// F(92) = 7540113804746346429
pub const MAX_FIB_INDEX: i64 = 92;

/// Largest index the CLI driver computes with arbitrary precision.
///
/// F(100000) has 20,899 decimal digits. The additive loop is quadratic in
/// the index, so larger requests are refused instead of running unbounded.
pub const MAX_BIG_FIB_INDEX: u64 = 100_000;

/// Precomputed Fibonacci values for n = 0..=92.
///
/// F(93) = 12,200,160,415,121,876,738 is past `i64::MAX`
/// (9,223,372,036,854,775,807), so the table stops at F(92).
pub const FIB_TABLE: [i64; 93] = {
    let mut table = [0i64; 93];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Unreadable input or any other failure.
    pub const ERROR_GENERIC: u8 = 1;
}
