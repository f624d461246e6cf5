#![no_main]

use libfuzzer_sys::fuzz_target;

use fibonacci_lib::app::read_index;

fuzz_target!(|data: &[u8]| {
    // Any byte stream either parses or fails cleanly.
    let mut input = data;
    if let Ok(n) = read_index(&mut input) {
        let token = String::from_utf8_lossy(data);
        assert!(token.split_whitespace().any(|t| t.parse::<i64>() == Ok(n)));
    }
});
