//! One pool instance: config, vaults, and LP ledger.

use crate::address::{lp_mint_address, pool_address, vault_address, Address};
use crate::domain::{Amount, BasisPoints, LpTokens, MintId, MintPair};
use crate::error::Result;
use crate::state::{LpLedger, PoolConfig, ReserveVaultPair};

/// A pool's complete persistent state.
///
/// Created once by [`PoolEngine::initialize`](super::PoolEngine::initialize)
/// and mutated only through the engine's journaled operations. The pool
/// address doubles as the authority for every vault and ledger write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    address: Address,
    config: PoolConfig,
    vaults: ReserveVaultPair,
    lp_ledger: LpLedger,
}

impl Pool {
    /// Derives all record addresses and assembles a fresh pool.
    ///
    /// The config record address comes from `("amm", mint_x, mint_y,
    /// seed)`, the LP mint from `("mint", config)`, and each vault from
    /// `("vault", mint, config)`. Reserves and LP supply start at zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidMintPair`](crate::error::AmmError::InvalidMintPair)
    ///   if the mints are not distinct.
    /// - [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee) if
    ///   the fee exceeds 10 000 basis points.
    /// - [`AmmError::DerivationFailed`](crate::error::AmmError::DerivationFailed)
    ///   if any record derivation exhausts its bump range.
    pub fn create(mint_x: MintId, mint_y: MintId, seed: u64, fee: BasisPoints) -> Result<Self> {
        let pair = MintPair::new(mint_x, mint_y)?;
        fee.validate_fee()?;

        let (address, bump) = pool_address(&mint_x, &mint_y, seed)?;
        let (lp_mint, lp_bump) = lp_mint_address(&address)?;
        let (vault_x, _) = vault_address(&mint_x, &address)?;
        let (vault_y, _) = vault_address(&mint_y, &address)?;

        let config = PoolConfig::new(pair, seed, fee, bump, lp_bump)?;
        let vaults = ReserveVaultPair::new(address, vault_x, vault_y)?;
        let lp_ledger = LpLedger::new(lp_mint, address)?;

        Ok(Self {
            address,
            config,
            vaults,
            lp_ledger,
        })
    }

    /// Returns the pool's address (and write authority).
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the pool descriptor.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the vault pair.
    #[must_use]
    pub const fn vaults(&self) -> &ReserveVaultPair {
        &self.vaults
    }

    /// Returns the LP mint address.
    #[must_use]
    pub const fn lp_mint(&self) -> Address {
        self.lp_ledger.mint()
    }

    /// Returns the X reserve.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.vaults.reserve_x()
    }

    /// Returns the Y reserve.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.vaults.reserve_y()
    }

    /// Returns the outstanding LP supply.
    #[must_use]
    pub const fn total_supply(&self) -> LpTokens {
        self.lp_ledger.total_supply()
    }

    /// Returns `holder`'s LP balance.
    #[must_use]
    pub fn lp_balance_of(&self, holder: &Address) -> LpTokens {
        self.lp_ledger.balance_of(holder)
    }

    /// Returns the number of LP holders with non-zero balances.
    #[must_use]
    pub fn lp_holder_count(&self) -> usize {
        self.lp_ledger.holder_count()
    }

    /// Re-checks the LP ledger's supply invariant.
    ///
    /// # Errors
    ///
    /// Propagates the ledger's audit failure.
    pub fn audit(&self) -> Result<()> {
        self.lp_ledger.audit()
    }

    pub(crate) fn vaults_mut(&mut self) -> &mut ReserveVaultPair {
        &mut self.vaults
    }

    pub(crate) fn lp_ledger_mut(&mut self) -> &mut LpLedger {
        &mut self.lp_ledger
    }
}
