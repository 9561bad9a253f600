//! Limb arithmetic: add, subtract, shift-by-one, multiply.
//!
//! Each operation reads its operands, writes a freshly allocated scratch
//! value, and returns it. The `*_assign*` forms commit that scratch into
//! `self` with [`BigNum::set`], which is how a destination that is also an
//! operand is updated.

use super::{alloc_limbs, BigNum, BigNumError};
use crate::constants::LIMB_BITS;

const TOP_BIT: u64 = 1 << (LIMB_BITS - 1);

/// `a + b + carry` as `(sum, carry_out)`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn add_with_carry(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let sum = u128::from(a) + u128::from(b) + u128::from(carry);
    (sum as u64, (sum >> LIMB_BITS) as u64)
}

impl BigNum {
    /// `self + rhs`.
    ///
    /// The scratch result starts with the longer operand's capacity; it grows
    /// only when a carry leaves the top limb of a full buffer.
    pub fn add(&self, rhs: &Self) -> Result<Self, BigNumError> {
        let (long, short) = if rhs.size > self.size {
            (rhs, self)
        } else {
            (self, rhs)
        };

        let mut out = Self {
            limbs: alloc_limbs(long.capacity())?,
            size: long.size,
        };

        let mut carry = 0u64;
        for i in 0..short.size {
            (out.limbs[i], carry) = add_with_carry(long.limbs[i], short.limbs[i], carry);
        }
        for i in short.size..long.size {
            (out.limbs[i], carry) = add_with_carry(long.limbs[i], 0, carry);
        }

        if carry != 0 {
            out.push_limb(1)?;
        }
        Ok(out)
    }

    /// `self - rhs`.
    ///
    /// Fails with [`BigNumError::Underflow`] when `self < rhs`. Since the
    /// minuend is at least the subtrahend, every borrow chain ends inside the
    /// minuend's significant limbs. The result is normalised.
    pub fn sub(&self, rhs: &Self) -> Result<Self, BigNumError> {
        if *self < *rhs {
            return Err(BigNumError::Underflow);
        }

        let mut out = self.try_clone()?;
        for (i, &y) in rhs.significant().iter().enumerate() {
            if out.limbs[i] < y {
                let mut j = i + 1;
                while out.limbs[j] == 0 {
                    out.limbs[j] = u64::MAX;
                    j += 1;
                }
                out.limbs[j] -= 1;
            }
            out.limbs[i] = out.limbs[i].wrapping_sub(y);
        }

        out.normalize();
        Ok(out)
    }

    /// `self * 2`.
    pub fn shl1(&self) -> Result<Self, BigNumError> {
        let mut out = self.try_clone()?;
        if out.limbs[out.size - 1] & TOP_BIT != 0 && out.size == out.capacity() {
            out.grow()?;
        }

        let mut carry = 0u64;
        for limb in &mut out.limbs[..out.size] {
            let outgoing = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = outgoing;
        }

        if carry != 0 {
            out.push_limb(1)?;
        }
        Ok(out)
    }

    /// `self * rhs` by shift-and-add over the bits of `self`.
    ///
    /// For every bit of every limb of `self`, least significant first, the
    /// running shifted copy of `rhs` is added when the bit is set and then
    /// doubled. Quadratic in the limb count.
    pub fn mul(&self, rhs: &Self) -> Result<Self, BigNumError> {
        let mut addend = rhs.try_clone()?;
        let mut out = Self::zero();

        for &limb in self.limbs() {
            for bit in 0..LIMB_BITS {
                if (limb >> bit) & 1 == 1 {
                    out.add_assign_ref(&addend)?;
                }
                addend.shl1_assign()?;
            }
        }
        Ok(out)
    }

    /// `self = self + rhs`.
    pub fn add_assign_ref(&mut self, rhs: &Self) -> Result<(), BigNumError> {
        let sum = self.add(rhs)?;
        self.set(sum);
        Ok(())
    }

    /// `self = self - rhs`.
    pub fn sub_assign_ref(&mut self, rhs: &Self) -> Result<(), BigNumError> {
        let diff = self.sub(rhs)?;
        self.set(diff);
        Ok(())
    }

    /// `self = self * rhs`.
    pub fn mul_assign_ref(&mut self, rhs: &Self) -> Result<(), BigNumError> {
        let product = self.mul(rhs)?;
        self.set(product);
        Ok(())
    }

    /// `self = self * 2`.
    pub fn shl1_assign(&mut self) -> Result<(), BigNumError> {
        let doubled = self.shl1()?;
        self.set(doubled);
        Ok(())
    }
}
