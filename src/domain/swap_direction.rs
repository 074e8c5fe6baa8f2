//! Swap direction across the pool's mint pair.

use core::fmt;

/// Which side of the pool a swap sells into.
///
/// A pool holds an X reserve and a Y reserve; a swap always sells one
/// side and buys the other. Direction is explicit in the operation
/// rather than inferred from a mint argument, matching the wire
/// interface `Swap(direction, amountIn, minOut)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token X, receive token Y.
    XtoY,
    /// Sell token Y, receive token X.
    YtoX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XtoY => Self::YtoX,
            Self::YtoX => Self::XtoY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XtoY => write!(f, "X->Y"),
            Self::YtoX => write!(f, "Y->X"),
        }
    }
}
