//! Arbitrary-precision unsigned integers over 64-bit limbs.
//!
//! A [`BigNum`] stores its magnitude least-significant limb first. Every
//! arithmetic operation builds its result in a scratch value and commits it
//! into the destination only once the scratch is fully formed, so a failed
//! allocation never leaves a destination half-written and a destination may
//! safely be one of the operands.

mod arith;
mod decimal;
mod interop;

use std::cmp::Ordering;

/// Error type for bignum operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigNumError {
    /// Limb storage could not be allocated.
    #[error("failed to allocate {limbs} limbs")]
    AllocationFailed { limbs: usize },

    /// The decimal digit buffer could not be allocated.
    #[error("failed to allocate {digits} decimal digits")]
    DigitsAllocationFailed { digits: usize },

    /// Subtraction whose minuend is smaller than its subtrahend.
    #[error("subtraction underflow: minuend is smaller than subtrahend")]
    Underflow,

    /// A non-digit character in a decimal string.
    #[error("invalid decimal digit {0:?}")]
    InvalidDigit(char),

    /// An empty decimal string.
    #[error("empty decimal string")]
    Empty,
}

/// Allocate `capacity` zero-filled limbs, reporting failure instead of aborting.
pub(crate) fn alloc_limbs(capacity: usize) -> Result<Vec<u64>, BigNumError> {
    let mut limbs = Vec::new();
    limbs
        .try_reserve_exact(capacity)
        .map_err(|_| BigNumError::AllocationFailed { limbs: capacity })?;
    limbs.resize(capacity, 0);
    Ok(limbs)
}

/// Length of `limbs` without its most-significant zero limbs, never below 1.
fn normalized_len(limbs: &[u64]) -> usize {
    limbs.iter().rposition(|&limb| limb != 0).map_or(1, |i| i + 1)
}

/// Non-negative integer of unbounded size.
///
/// `limbs.len()` is the allocated capacity; only `limbs[..size]` carry
/// meaning. Slots past `size` are always initialised, but their contents are
/// not relied upon.
///
/// `Clone` aborts on allocation failure like any `Vec`; engine operations
/// copy through [`BigNum::try_clone`] instead.
///
/// # Example
/// ```
/// use fibengine_core::BigNum;
///
/// let a = BigNum::from_u64(u64::MAX);
/// let b = a.add(&BigNum::from_u64(1)).unwrap();
/// assert_eq!(b.size(), 2);
/// assert_eq!(b.to_decimal().unwrap(), "18446744073709551616");
/// ```
#[derive(Debug, Clone)]
pub struct BigNum {
    limbs: Vec<u64>,
    size: usize,
}

impl BigNum {
    /// Zero, with room for two limbs.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            limbs: vec![0; 2],
            size: 1,
        }
    }

    /// A single-limb value.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self {
            limbs: vec![value, 0],
            size: 1,
        }
    }

    /// Build a value from little-endian limbs.
    ///
    /// Most-significant zero limbs are dropped and the capacity is exactly the
    /// resulting size, so the next carry out of the top limb forces a growth.
    #[must_use]
    pub fn from_limbs(limbs: &[u64]) -> Self {
        let size = normalized_len(limbs);
        let mut buf = limbs[..size.min(limbs.len())].to_vec();
        if buf.is_empty() {
            buf.push(0);
        }
        Self { limbs: buf, size }
    }

    /// Number of significant limbs.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated limb slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// The significant limbs, least-significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs[..self.size]
    }

    /// Significant limbs with any most-significant zero limbs stripped.
    fn significant(&self) -> &[u64] {
        let limbs = self.limbs();
        &limbs[..normalized_len(limbs)]
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs().iter().all(|&limb| limb == 0)
    }

    /// Number of bits needed to represent the value (0 for zero).
    #[must_use]
    pub fn bits(&self) -> u64 {
        let limbs = self.significant();
        let top = limbs[limbs.len() - 1];
        if top == 0 {
            return 0;
        }
        (limbs.len() as u64 - 1) * u64::from(crate::constants::LIMB_BITS)
            + u64::from(crate::constants::LIMB_BITS - top.leading_zeros())
    }

    /// The value as a `u64`, if it fits in one limb.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.significant() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Deep copy with the same capacity, failing instead of aborting on
    /// allocation failure.
    pub fn try_clone(&self) -> Result<Self, BigNumError> {
        let mut limbs = alloc_limbs(self.capacity())?;
        limbs[..self.size].copy_from_slice(self.limbs());
        Ok(Self {
            limbs,
            size: self.size,
        })
    }

    /// Replace `self` with a deep copy of `src`.
    ///
    /// The new buffer is fully built before the old one is released; on error
    /// `self` is unchanged. Afterwards the two values never share storage.
    pub fn copy_from(&mut self, src: &Self) -> Result<(), BigNumError> {
        let copy = src.try_clone()?;
        self.set(copy);
        Ok(())
    }

    /// Move `src` into `self`, releasing the storage `self` held before.
    ///
    /// `src` is consumed; its buffer is adopted as-is without duplication.
    pub fn set(&mut self, src: Self) {
        *self = src;
    }

    /// Exchange the representations of two values in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Double the capacity, keeping the significant limbs.
    pub fn grow(&mut self) -> Result<(), BigNumError> {
        self.reallocate(self.capacity().max(1).saturating_mul(2))
    }

    /// Move the significant limbs into a fresh buffer of `capacity` slots.
    /// On failure `self` keeps its old buffer.
    fn reallocate(&mut self, capacity: usize) -> Result<(), BigNumError> {
        let mut limbs = alloc_limbs(capacity)?;
        limbs[..self.size].copy_from_slice(self.limbs());
        self.limbs = limbs;
        Ok(())
    }

    /// Append a new most-significant limb, growing first when full.
    fn push_limb(&mut self, limb: u64) -> Result<(), BigNumError> {
        if self.size == self.capacity() {
            self.grow()?;
        }
        self.limbs[self.size] = limb;
        self.size += 1;
        Ok(())
    }

    /// Drop most-significant zero limbs, keeping at least one.
    fn normalize(&mut self) {
        self.size = normalized_len(self.limbs());
    }
}

impl Default for BigNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BigNum {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for BigNum {}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }
}
