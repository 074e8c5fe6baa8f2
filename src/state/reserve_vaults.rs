//! The pool's two custody balances.

use crate::address::Address;
use crate::domain::{Amount, SwapDirection};
use crate::error::{AmmError, Result};

/// The two token reserves custodied by one pool.
///
/// Reserves are writable only through the authorized mutators, each of
/// which requires the owning pool's address as `authority`. There is no
/// path for an external transfer to land in a vault: the engine is the
/// sole writer, and the owner address must itself verify as
/// engine-derived at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveVaultPair {
    owner: Address,
    vault_x: Address,
    vault_y: Address,
    reserve_x: Amount,
    reserve_y: Amount,
}

impl ReserveVaultPair {
    /// Creates the vault pair with zero balances.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnauthorizedWrite`] if `owner` does not carry
    /// the engine-derived marker — an externally claimable address must
    /// never own custody storage.
    pub fn new(owner: Address, vault_x: Address, vault_y: Address) -> Result<Self> {
        if !owner.is_engine_derived() {
            return Err(AmmError::UnauthorizedWrite(
                "vault owner must be an engine-derived address",
            ));
        }
        Ok(Self {
            owner,
            vault_x,
            vault_y,
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
        })
    }

    /// Returns the owning pool address.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the X vault's address.
    #[must_use]
    pub const fn vault_x(&self) -> Address {
        self.vault_x
    }

    /// Returns the Y vault's address.
    #[must_use]
    pub const fn vault_y(&self) -> Address {
        self.vault_y
    }

    /// Returns the X reserve.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the Y reserve.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns `(reserve_in, reserve_out)` for a swap direction.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XtoY => (self.reserve_x, self.reserve_y),
            SwapDirection::YtoX => (self.reserve_y, self.reserve_x),
        }
    }

    /// Credits the X reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnauthorizedWrite`] if `authority` is not the owner.
    /// - [`AmmError::Overflow`] if the balance would exceed `u64::MAX`.
    pub fn credit_x(&mut self, authority: &Address, amount: Amount) -> Result<()> {
        self.check_authority(authority)?;
        self.reserve_x = self
            .reserve_x
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("vault X balance overflow"))?;
        Ok(())
    }

    /// Credits the Y reserve.
    ///
    /// # Errors
    ///
    /// Same as [`credit_x`](Self::credit_x).
    pub fn credit_y(&mut self, authority: &Address, amount: Amount) -> Result<()> {
        self.check_authority(authority)?;
        self.reserve_y = self
            .reserve_y
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("vault Y balance overflow"))?;
        Ok(())
    }

    /// Debits the X reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnauthorizedWrite`] if `authority` is not the owner.
    /// - [`AmmError::InsufficientFunds`] if the reserve cannot cover it.
    pub fn debit_x(&mut self, authority: &Address, amount: Amount) -> Result<()> {
        self.check_authority(authority)?;
        self.reserve_x = self
            .reserve_x
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientFunds)?;
        Ok(())
    }

    /// Debits the Y reserve.
    ///
    /// # Errors
    ///
    /// Same as [`debit_x`](Self::debit_x).
    pub fn debit_y(&mut self, authority: &Address, amount: Amount) -> Result<()> {
        self.check_authority(authority)?;
        self.reserve_y = self
            .reserve_y
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientFunds)?;
        Ok(())
    }

    fn check_authority(&self, authority: &Address) -> Result<()> {
        if *authority != self.owner {
            return Err(AmmError::UnauthorizedWrite(
                "vault write requires the owning pool's authority",
            ));
        }
        Ok(())
    }
}
