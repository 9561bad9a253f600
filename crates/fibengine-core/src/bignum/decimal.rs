//! Decimal conversion.
//!
//! Output uses double-dabble: the bits are scanned from the most significant
//! down, and for each bit the decimal digit buffer is doubled in place and the
//! bit added at the bottom. No division is needed.

use std::fmt;
use std::str::FromStr;

use super::{BigNum, BigNumError};
use crate::constants::LIMB_BITS;

/// Upper bound on the decimal digits of a value with `size` limbs.
///
/// `2^(64 * size)` has fewer than `64 * size / 3` digits since
/// `log10(2) < 1/3`.
fn digit_capacity(size: usize) -> usize {
    size * LIMB_BITS as usize / 3 + 1
}

/// Allocate `len` zeroed decimal digits.
fn alloc_digits(len: usize) -> Result<Vec<u8>, BigNumError> {
    let mut digits = Vec::new();
    digits
        .try_reserve_exact(len)
        .map_err(|_| BigNumError::DigitsAllocationFailed { digits: len })?;
    digits.resize(len, 0);
    Ok(digits)
}

impl BigNum {
    /// Exact decimal representation with no leading zeros ("0" for zero).
    ///
    /// # Example
    /// ```
    /// use fibengine_core::BigNum;
    ///
    /// let v = BigNum::from_limbs(&[0, 1]);
    /// assert_eq!(v.to_decimal().unwrap(), "18446744073709551616");
    /// ```
    pub fn to_decimal(&self) -> Result<String, BigNumError> {
        let len = digit_capacity(self.size);
        let mut digits = alloc_digits(len)?;

        for &limb in self.limbs().iter().rev() {
            for shift in (0..LIMB_BITS).rev() {
                let mut carry = u8::from((limb >> shift) & 1 == 1);
                for digit in digits.iter_mut().rev() {
                    let doubled = *digit * 2 + carry;
                    carry = u8::from(doubled > 9);
                    *digit = if carry == 1 { doubled - 10 } else { doubled };
                }
            }
        }

        let first = digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(len - 1);

        let mut out = String::new();
        out.try_reserve_exact(len - first)
            .map_err(|_| BigNumError::DigitsAllocationFailed { digits: len - first })?;
        out.extend(digits[first..].iter().map(|&d| char::from(b'0' + d)));
        Ok(out)
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.to_decimal().map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", &digits)
    }
}

/// Parses a plain decimal string (ASCII digits only).
///
/// Each digit is folded in as `acc * 10 + d`, where `acc * 10` is computed as
/// `(acc << 3) + (acc << 1)`.
impl FromStr for BigNum {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BigNumError::Empty);
        }

        let mut acc = Self::zero();
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(BigNumError::InvalidDigit(c))?;
            let twice = acc.shl1()?;
            let eight = twice.shl1()?.shl1()?;
            let mut next = eight.add(&twice)?;
            next.add_assign_ref(&Self::from_u64(u64::from(digit)))?;
            acc.set(next);
        }
        Ok(acc)
    }
}
