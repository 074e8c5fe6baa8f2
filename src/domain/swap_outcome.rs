//! Receipt of an executed swap.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::{AmmError, Result};

/// The committed result of a swap operation.
///
/// `amount_in` is the gross input (fee included — the fee accrues to the
/// pool's reserves rather than a separate counter), `fee` the portion of
/// the input excluded from pricing, and `amount_out` the output actually
/// transferred to the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if `fee` exceeds `amount_in` —
    /// a fee cannot be larger than the input it was carved from.
    pub fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Result<Self> {
        if fee > amount_in {
            return Err(AmmError::Overflow("fee exceeds swap input"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the gross input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount transferred to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion of the input.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} in={} out={} fee={}",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
