//! `a × b / d` with a widened intermediate.

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Computes `a × b / divisor` through a `u128` intermediate.
///
/// The multiplication cannot overflow (`u64 × u64` fits in `u128`); the
/// division result is checked back down into `u64` range.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `divisor` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u64::MAX`.
pub fn mul_div(a: u64, b: u64, divisor: u64, rounding: Rounding) -> Result<u64> {
    let quotient = div_wide(u128::from(a) * u128::from(b), u128::from(divisor), rounding)?;
    u64::try_from(quotient).map_err(|_| AmmError::Overflow("mul_div quotient exceeds u64"))
}

/// Divides two `u128` values with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `divisor` is zero.
pub fn div_wide(numerator: u128, divisor: u128, rounding: Rounding) -> Result<u128> {
    if divisor == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = match rounding {
        Rounding::Down => numerator / divisor,
        Rounding::Up => numerator.div_ceil(divisor),
    };
    Ok(quotient)
}
