//! The fungible LP share ledger.

use std::collections::BTreeMap;

use crate::address::Address;
use crate::domain::LpTokens;
use crate::error::{AmmError, Result};

/// Total LP supply plus per-holder balances for one pool.
///
/// Minting and burning require the pool's authority, exactly like vault
/// writes. The structural invariant — the sum of holder balances always
/// equals `total_supply` — holds by construction because both values
/// move together inside each mutator; [`audit`](Self::audit) re-checks
/// it for tests and property suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpLedger {
    mint: Address,
    authority: Address,
    total_supply: LpTokens,
    balances: BTreeMap<Address, LpTokens>,
}

impl LpLedger {
    /// Creates an empty ledger whose mint authority is the pool itself.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnauthorizedWrite`] if `authority` is not an
    /// engine-derived address.
    pub fn new(mint: Address, authority: Address) -> Result<Self> {
        if !authority.is_engine_derived() {
            return Err(AmmError::UnauthorizedWrite(
                "LP mint authority must be an engine-derived address",
            ));
        }
        Ok(Self {
            mint,
            authority,
            total_supply: LpTokens::ZERO,
            balances: BTreeMap::new(),
        })
    }

    /// Returns the LP mint address.
    #[must_use]
    pub const fn mint(&self) -> Address {
        self.mint
    }

    /// Returns the outstanding total supply.
    #[must_use]
    pub const fn total_supply(&self) -> LpTokens {
        self.total_supply
    }

    /// Returns the balance of `holder` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, holder: &Address) -> LpTokens {
        self.balances.get(holder).copied().unwrap_or(LpTokens::ZERO)
    }

    /// Returns the number of holders with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Mints `amount` shares to `holder`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnauthorizedWrite`] if `authority` is not the mint
    ///   authority.
    /// - [`AmmError::Overflow`] if the holder balance or total supply
    ///   would exceed `u64::MAX`.
    pub fn mint_to(&mut self, authority: &Address, holder: Address, amount: LpTokens) -> Result<()> {
        self.check_authority(authority)?;
        let balance = self.balance_of(&holder);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("LP holder balance overflow"))?;
        let new_supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("LP total supply overflow"))?;
        self.balances.insert(holder, new_balance);
        self.total_supply = new_supply;
        Ok(())
    }

    /// Burns `amount` shares from `holder`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnauthorizedWrite`] if `authority` is not the mint
    ///   authority.
    /// - [`AmmError::InsufficientLiquidity`] if the holder's balance
    ///   cannot cover the burn.
    pub fn burn_from(
        &mut self,
        authority: &Address,
        holder: &Address,
        amount: LpTokens,
    ) -> Result<()> {
        self.check_authority(authority)?;
        let balance = self.balance_of(holder);
        let new_balance = balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientLiquidity)?;
        // total_supply >= balance >= amount, so this cannot underflow.
        let new_supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientLiquidity)?;
        if new_balance.is_zero() {
            self.balances.remove(holder);
        } else {
            self.balances.insert(*holder, new_balance);
        }
        self.total_supply = new_supply;
        Ok(())
    }

    /// Verifies that the sum of holder balances equals the total supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] describing the mismatch (or an
    /// actual sum overflow, which implies corruption either way).
    pub fn audit(&self) -> Result<()> {
        let mut sum = LpTokens::ZERO;
        for balance in self.balances.values() {
            sum = sum
                .checked_add(balance)
                .ok_or(AmmError::Overflow("LP balance sum overflow"))?;
        }
        if sum != self.total_supply {
            return Err(AmmError::Overflow("LP ledger sum diverges from supply"));
        }
        Ok(())
    }

    fn check_authority(&self, authority: &Address) -> Result<()> {
        if *authority != self.authority {
            return Err(AmmError::UnauthorizedWrite(
                "LP ledger write requires the pool's mint authority",
            ));
        }
        Ok(())
    }
}
