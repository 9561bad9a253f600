//! # fibengine-core
//!
//! Exact Fibonacci numbers for arbitrarily large indices.
//!
//! The [`bignum`] module holds a limb-based unsigned integer with add,
//! subtract, shift, multiply and decimal conversion. Two strategies are built
//! on it: [`linear::LinearAccumulation`] and [`fastdoubling::FastDoubling`].

pub mod bignum;
pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod linear;

// Re-exports
pub use bignum::{BigNum, BigNumError};
pub use calculator::{Algorithm, Calculator, FibError};
pub use constants::{exit_codes, FIB_TABLE, LIMB_BITS, MAX_FIB_U64, MAX_INDEX};

/// Compute F(n) with the given algorithm.
pub fn fibonacci(n: u64, algorithm: Algorithm) -> Result<BigNum, FibError> {
    algorithm.calculator().calculate(n)
}

/// Compute the decimal digits of F(n) with the given algorithm.
///
/// # Example
/// ```
/// use fibengine_core::{compute, Algorithm};
///
/// assert_eq!(compute(10, Algorithm::Linear).unwrap(), "55");
/// assert_eq!(compute(0, Algorithm::FastDoubling).unwrap(), "0");
/// ```
pub fn compute(n: u64, algorithm: Algorithm) -> Result<String, FibError> {
    Ok(fibonacci(n, algorithm)?.to_decimal()?)
}
