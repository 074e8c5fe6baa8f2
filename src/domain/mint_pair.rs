//! Pair of distinct pool mints.

use super::MintId;
use crate::error::{AmmError, Result};

/// The two mints custodied by one pool, in caller order.
///
/// Unlike exchanges that canonicalize pair ordering, the pair is kept
/// exactly as the caller supplied it: the pool identity is derived from
/// `(mint_x, mint_y, seed)` in order, so `(A, B)` and `(B, A)` name
/// different pools. The only structural invariant is distinctness.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{MintId, MintPair};
///
/// let x = MintId::from_bytes([1u8; 32]);
/// let y = MintId::from_bytes([2u8; 32]);
/// let pair = MintPair::new(x, y).expect("distinct mints");
/// assert_eq!(pair.mint_x(), x);
/// assert_eq!(pair.mint_y(), y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintPair {
    mint_x: MintId,
    mint_y: MintId,
}

impl MintPair {
    /// Creates a new `MintPair` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidMintPair`] if both mints are identical.
    pub fn new(mint_x: MintId, mint_y: MintId) -> Result<Self> {
        if mint_x == mint_y {
            return Err(AmmError::InvalidMintPair(
                "pool requires two distinct mints",
            ));
        }
        Ok(Self { mint_x, mint_y })
    }

    /// Returns the X-side mint.
    #[must_use]
    pub const fn mint_x(&self) -> MintId {
        self.mint_x
    }

    /// Returns the Y-side mint.
    #[must_use]
    pub const fn mint_y(&self) -> MintId {
        self.mint_y
    }

    /// Returns `true` if the given mint is one of the pair.
    #[must_use]
    pub fn contains(&self, mint: &MintId) -> bool {
        self.mint_x == *mint || self.mint_y == *mint
    }

    /// Returns the counterpart of `mint` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidMintPair`] if `mint` is not in the pair.
    pub fn other(&self, mint: &MintId) -> Result<MintId> {
        if *mint == self.mint_x {
            Ok(self.mint_y)
        } else if *mint == self.mint_y {
            Ok(self.mint_x)
        } else {
            Err(AmmError::InvalidMintPair("mint is not part of this pair"))
        }
    }
}
