//! Linear accumulation: F(n) by `n - 2` bignum additions.

use crate::bignum::BigNum;
use crate::calculator::{Calculator, FibError};

/// Iterative calculator rotating three registers.
///
/// # Example
/// ```
/// use fibengine_core::calculator::Calculator;
/// use fibengine_core::linear::LinearAccumulation;
///
/// let f = LinearAccumulation::new().calculate(100).unwrap();
/// assert_eq!(f.to_string(), "354224848179261915075");
/// ```
pub struct LinearAccumulation;

impl LinearAccumulation {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn accumulate(n: u64) -> Result<BigNum, FibError> {
        if n == 0 {
            return Ok(BigNum::zero());
        }

        // prev = F(i-2), curr = F(i-1) on entry to step i
        let mut prev = BigNum::from_u64(1);
        let mut curr = BigNum::from_u64(1);
        if n <= 2 {
            return Ok(curr);
        }

        let mut next = BigNum::zero();
        for _ in 3..=n {
            next.set(prev.add(&curr)?);
            prev.swap(&mut curr);
            curr.swap(&mut next);
        }
        Ok(curr)
    }
}

impl Default for LinearAccumulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for LinearAccumulation {
    fn calculate(&self, n: u64) -> Result<BigNum, FibError> {
        Self::accumulate(n)
    }

    fn name(&self) -> &'static str {
        "LinearAccumulation"
    }
}
