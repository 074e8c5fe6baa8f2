//! LP share units.

use core::fmt;

/// A quantity of LP shares.
///
/// Distinct from [`Amount`](super::Amount) because LP shares measure
/// proportional ownership of a pool, not a quantity of either custodied
/// token. Keeping the unit separate stops reserve amounts and share
/// amounts from being mixed in arithmetic by accident.
///
/// # Examples
///
/// ```
/// use cpamm::domain::LpTokens;
///
/// let a = LpTokens::new(1_000);
/// let b = LpTokens::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(LpTokens::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct LpTokens(u64);

impl LpTokens {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `LpTokens` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the share amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for LpTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
