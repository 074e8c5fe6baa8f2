//! Receipts of liquidity operations.

use super::{Amount, LpTokens};

/// The committed result of a deposit.
///
/// `actual_x` / `actual_y` are the amounts actually pulled from the
/// depositor — never more than the desired amounts, and ratio-matched to
/// the pool on every deposit after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositOutcome {
    actual_x: Amount,
    actual_y: Amount,
    lp_minted: LpTokens,
}

impl DepositOutcome {
    /// Creates a new `DepositOutcome`.
    #[must_use]
    pub const fn new(actual_x: Amount, actual_y: Amount, lp_minted: LpTokens) -> Self {
        Self {
            actual_x,
            actual_y,
            lp_minted,
        }
    }

    /// Returns the X amount transferred into the pool.
    #[must_use]
    pub const fn actual_x(&self) -> Amount {
        self.actual_x
    }

    /// Returns the Y amount transferred into the pool.
    #[must_use]
    pub const fn actual_y(&self) -> Amount {
        self.actual_y
    }

    /// Returns the LP shares minted to the depositor.
    #[must_use]
    pub const fn lp_minted(&self) -> LpTokens {
        self.lp_minted
    }
}

/// The committed result of a withdrawal.
///
/// Both amounts are floor-divided proportional shares; dust below one
/// unit stays in the pool for the remaining holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawOutcome {
    amount_x: Amount,
    amount_y: Amount,
    lp_burned: LpTokens,
}

impl WithdrawOutcome {
    /// Creates a new `WithdrawOutcome`.
    #[must_use]
    pub const fn new(amount_x: Amount, amount_y: Amount, lp_burned: LpTokens) -> Self {
        Self {
            amount_x,
            amount_y,
            lp_burned,
        }
    }

    /// Returns the X amount transferred to the withdrawer.
    #[must_use]
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Returns the Y amount transferred to the withdrawer.
    #[must_use]
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }

    /// Returns the LP shares burned.
    #[must_use]
    pub const fn lp_burned(&self) -> LpTokens {
        self.lp_burned
    }
}
