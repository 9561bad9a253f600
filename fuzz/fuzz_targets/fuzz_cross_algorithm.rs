#![no_main]

use libfuzzer_sys::fuzz_target;

use fibengine_core::{fibonacci, Algorithm};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Linear is O(n) adds, keep n within the device bound
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 10_001;

    let linear = fibonacci(n, Algorithm::Linear);
    let fast = fibonacci(n, Algorithm::FastDoubling);

    if let (Ok(l), Ok(f)) = (linear, fast) {
        assert_eq!(l, f, "Linear != FastDoubling at n={n}");
        assert_eq!(
            l.to_decimal().unwrap(),
            f.to_decimal().unwrap(),
            "decimal output differs at n={n}"
        );
    }
});
