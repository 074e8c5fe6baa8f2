//! External token balance table.

use std::collections::BTreeMap;

use crate::address::Address;
use crate::domain::{Amount, MintId};
use crate::error::{AmmError, Result};

/// Per-mint, per-holder token balances outside the pool's vaults.
///
/// This table stands in for the surrounding token-custody runtime: it
/// holds what depositors and traders own before and after operations.
/// Debit consent (the caller having signed for their own funds) is the
/// signing collaborator's concern; the table enforces only conservation
/// (exact-amount moves, no negative balances, no silent wrap-around).
///
/// # Examples
///
/// ```
/// use cpamm::address::Address;
/// use cpamm::domain::{Amount, MintId};
/// use cpamm::state::TokenBalances;
///
/// let mint = MintId::from_bytes([1u8; 32]);
/// let wallet = Address::from_bytes([7u8; 32]);
///
/// let mut balances = TokenBalances::new();
/// balances.credit(mint, wallet, Amount::new(500)).expect("credit");
/// balances.debit(&mint, &wallet, Amount::new(200)).expect("debit");
/// assert_eq!(balances.balance_of(&mint, &wallet), Amount::new(300));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBalances {
    entries: BTreeMap<(MintId, Address), Amount>,
}

impl TokenBalances {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the balance of `holder` in `mint` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, mint: &MintId, holder: &Address) -> Amount {
        self.entries
            .get(&(*mint, *holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Credits `amount` of `mint` to `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed
    /// `u64::MAX`.
    pub fn credit(&mut self, mint: MintId, holder: Address, amount: Amount) -> Result<()> {
        let balance = self.balance_of(&mint, &holder);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("token balance overflow"))?;
        self.entries.insert((mint, holder), new_balance);
        Ok(())
    }

    /// Debits `amount` of `mint` from `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientFunds`] if the balance cannot
    /// cover the debit.
    pub fn debit(&mut self, mint: &MintId, holder: &Address, amount: Amount) -> Result<()> {
        let balance = self.balance_of(mint, holder);
        let new_balance = balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientFunds)?;
        if new_balance.is_zero() {
            self.entries.remove(&(*mint, *holder));
        } else {
            self.entries.insert((*mint, *holder), new_balance);
        }
        Ok(())
    }

    /// Overwrites a cell with a precomputed balance.
    ///
    /// Used by the journal's commit phase, which has already validated
    /// every delta against the current state.
    pub(crate) fn put(&mut self, mint: MintId, holder: Address, amount: Amount) {
        if amount.is_zero() {
            self.entries.remove(&(mint, holder));
        } else {
            self.entries.insert((mint, holder), amount);
        }
    }
}
