//! Cross-check device readings against num-bigint.

use num_bigint::BigUint;

use fibengine_device::Reading;

use crate::errors::AppError;

/// F(n) by fast doubling on `BigUint`, independent of the bignum engine.
#[must_use]
pub fn reference_fibonacci(n: u64) -> BigUint {
    let mut fk = BigUint::default();
    let mut fk1 = BigUint::from(1u32);

    for i in (0..u64::BITS - n.leading_zeros()).rev() {
        // F(2k) = F(k) * (2*F(k+1) - F(k))
        let t = (&fk1 << 1u32) - &fk;
        let f2k = &fk * &t;
        // F(2k+1) = F(k)^2 + F(k+1)^2
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }

    fk
}

/// Check one reading against [`reference_fibonacci`].
pub fn verify_reading(reading: &Reading) -> Result<(), AppError> {
    let parsed = reading
        .value
        .parse::<BigUint>()
        .map_err(|_| AppError::Verification(reading.index))?;
    if parsed == reference_fibonacci(reading.index) {
        tracing::debug!(index = reading.index, "reading verified");
        Ok(())
    } else {
        Err(AppError::Verification(reading.index))
    }
}
