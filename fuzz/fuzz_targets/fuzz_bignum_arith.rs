#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibengine_core::BigNum;

fn limbs(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks(8)
        .map(|c| {
            let mut word = [0u8; 8];
            word[..c.len()].copy_from_slice(c);
            u64::from_le_bytes(word)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let split = usize::from(data[0]) % data.len();
    let (left, right) = data[1..].split_at(split.min(data.len() - 1));

    let a = BigNum::from_limbs(&limbs(left));
    let b = BigNum::from_limbs(&limbs(right));
    let ra = BigUint::from(&a);
    let rb = BigUint::from(&b);

    assert_eq!(BigUint::from(&a.add(&b).unwrap()), &ra + &rb);
    assert_eq!(BigUint::from(&a.mul(&b).unwrap()), &ra * &rb);
    assert_eq!(BigUint::from(&a.shl1().unwrap()), &ra << 1u32);
    if ra >= rb {
        assert_eq!(BigUint::from(&a.sub(&b).unwrap()), &ra - &rb);
    } else {
        assert!(a.sub(&b).is_err());
    }
    assert_eq!(a.to_decimal().unwrap(), ra.to_string());
});
