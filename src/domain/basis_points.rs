//! Basis-point fee rates.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{AmmError, Result};

/// Maximum value that represents 100%.
const MAX_BPS: u16 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// The wire format is a `u16`, so values above 10 000 are representable
/// but never valid as fees; [`validate_fee`](Self::validate_fee) is the
/// gate every pool fee passes through at Initialize time.
///
/// # Examples
///
/// ```
/// use cpamm::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30);
/// assert_eq!(fee.get(), 30);
/// assert!(fee.validate_fee().is_ok());
/// assert!(BasisPoints::new(10_001).validate_fee().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Validates the value as a pool fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the value exceeds 10 000.
    pub const fn validate_fee(&self) -> Result<()> {
        if self.0 > MAX_BPS {
            return Err(AmmError::InvalidFee);
        }
        Ok(())
    }

    /// Deducts this fee from `amount`, returning the net remainder:
    /// `amount × (10 000 − bps) / 10 000`, floor-divided.
    ///
    /// Floor division means the fee itself is rounded up — dust from the
    /// deduction stays in the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the rate exceeds 10 000,
    /// [`AmmError::DivisionByZero`] never (denominator is constant).
    pub fn deduct_from(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        self.validate_fee()?;
        let complement = u128::from(MAX_BPS - self.0);
        let product = u128::from(amount.get()) * complement;
        let divisor = u128::from(MAX_BPS);
        let net = match rounding {
            Rounding::Down => product / divisor,
            Rounding::Up => product.div_ceil(divisor),
        };
        // net <= amount because complement <= MAX_BPS.
        Ok(Amount::new(net as u64))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
