//! The persistent pool descriptor.

use crate::domain::{BasisPoints, MintId, MintPair, Rounding};
use crate::error::Result;

/// The immutable descriptor of one pool instance.
///
/// Stores everything needed to re-derive and verify the pool's records:
/// the mint pair, the caller-chosen seed discriminating multiple pools
/// over the same pair, the swap fee, and the two derivation salts
/// (`bump` for the config record itself, `lp_bump` for the LP mint).
///
/// `(mint_x, mint_y, seed)` uniquely determines the pool's address; the
/// fee and bumps are attributes of that identity, not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pair: MintPair,
    seed: u64,
    fee: BasisPoints,
    bump: u8,
    lp_bump: u8,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// The mint pair is already validated distinct at construction;
    /// this validates the fee range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee)
    /// if `fee` exceeds 10 000 basis points.
    pub fn new(pair: MintPair, seed: u64, fee: BasisPoints, bump: u8, lp_bump: u8) -> Result<Self> {
        fee.validate_fee()?;
        Ok(Self {
            pair,
            seed,
            fee,
            bump,
            lp_bump,
        })
    }

    /// Returns the mint pair.
    #[must_use]
    pub const fn pair(&self) -> &MintPair {
        &self.pair
    }

    /// Returns the X-side mint.
    #[must_use]
    pub const fn mint_x(&self) -> MintId {
        self.pair.mint_x()
    }

    /// Returns the Y-side mint.
    #[must_use]
    pub const fn mint_y(&self) -> MintId {
        self.pair.mint_y()
    }

    /// Returns the caller-chosen seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Returns the config record's derivation salt.
    #[must_use]
    pub const fn bump(&self) -> u8 {
        self.bump
    }

    /// Returns the LP mint's derivation salt.
    #[must_use]
    pub const fn lp_bump(&self) -> u8 {
        self.lp_bump
    }

    /// Deducts the swap fee from `amount_in`, floor-dividing the net.
    ///
    /// # Errors
    ///
    /// Propagates [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee)
    /// (unreachable after construction-time validation).
    pub fn net_of_fee(&self, amount_in: crate::domain::Amount) -> Result<crate::domain::Amount> {
        self.fee.deduct_from(amount_in, Rounding::Down)
    }
}
