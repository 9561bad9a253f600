//! Conversions to and from `num_bigint::BigUint`.

use num_bigint::BigUint;

use super::BigNum;

impl From<&BigNum> for BigUint {
    fn from(value: &BigNum) -> Self {
        let bytes: Vec<u8> = value
            .limbs()
            .iter()
            .flat_map(|limb| limb.to_le_bytes())
            .collect();
        BigUint::from_bytes_le(&bytes)
    }
}

impl From<&BigUint> for BigNum {
    fn from(value: &BigUint) -> Self {
        BigNum::from_limbs(&value.to_u64_digits())
    }
}
