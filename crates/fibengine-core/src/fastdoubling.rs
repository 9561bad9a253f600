//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Starts from (F(1), F(2)), which accounts for the top bit of n, and walks
//! the remaining bits from MSB to LSB. Registers are rotated with swaps.

use crate::bignum::BigNum;
use crate::calculator::{Calculator, FibError};

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibengine_core::calculator::Calculator;
/// use fibengine_core::fastdoubling::FastDoubling;
///
/// let f = FastDoubling::new().calculate(100).unwrap();
/// assert_eq!(f.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn execute_doubling_loop(n: u64) -> Result<BigNum, FibError> {
        if n == 0 {
            return Ok(BigNum::zero());
        }

        let mut fk = BigNum::from_u64(1);
        let mut fk1 = BigNum::from_u64(1);
        if n <= 2 {
            return Ok(fk);
        }

        let mut f2k = BigNum::zero();
        let mut f2k1 = BigNum::zero();
        let top_bit = u64::BITS - 1 - n.leading_zeros();

        for i in (0..top_bit).rev() {
            // F(2k) = F(k) * (2*F(k+1) - F(k))
            f2k.set(fk1.shl1()?);
            f2k.sub_assign_ref(&fk)?;
            f2k.mul_assign_ref(&fk)?;

            // F(2k+1) = F(k)^2 + F(k+1)^2
            f2k1.set(fk.mul(&fk)?);
            f2k1.add_assign_ref(&fk1.mul(&fk1)?)?;

            if (n >> i) & 1 == 1 {
                // (F(2k+1), F(2k) + F(2k+1))
                fk1.set(f2k.add(&f2k1)?);
                fk.swap(&mut f2k1);
            } else {
                fk.swap(&mut f2k);
                fk1.swap(&mut f2k1);
            }
        }

        Ok(fk)
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for FastDoubling {
    fn calculate(&self, n: u64) -> Result<BigNum, FibError> {
        Self::execute_doubling_loop(n)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
