//! Seed-based address derivation.
//!
//! An address is the SHA-256 digest of `seeds ‖ [bump] ‖ domain tag`,
//! searching bumps from 255 downward and accepting the first digest
//! that carries the engine-derived marker. Roughly half of all digests
//! qualify, so the expected search depth is one or two hashes and the
//! failure case — all 256 bumps missing — is practically unreachable.
//!
//! Derivation is a pure function: the same seeds always yield the same
//! `(address, bump)` pair.

use sha2::{Digest, Sha256};

use super::Address;
use crate::domain::MintId;
use crate::error::{AmmError, Result};

/// Seed tag for the pool config record.
pub const POOL_TAG: &[u8] = b"amm";

/// Seed tag for a pool's LP mint.
pub const LP_MINT_TAG: &[u8] = b"mint";

/// Seed tag for a pool's vaults.
pub const VAULT_TAG: &[u8] = b"vault";

/// Domain separator appended after the bump.
const DERIVE_DOMAIN: &[u8] = b"CpammDerivedRecord";

/// Derives an engine-owned address from a seed sequence.
///
/// Returns the address together with the bump (derivation salt) that
/// produced it. Persisting the bump lets a record re-verify its own
/// address without repeating the search.
///
/// # Errors
///
/// Returns [`AmmError::DerivationFailed`] if no bump in `0..=255`
/// yields a marked digest.
pub fn derive_address(seeds: &[&[u8]]) -> Result<(Address, u8)> {
    for bump in (0..=u8::MAX).rev() {
        let candidate = hash_candidate(seeds, bump);
        if candidate.is_engine_derived() {
            return Ok((candidate, bump));
        }
    }
    Err(AmmError::DerivationFailed)
}

fn hash_candidate(seeds: &[&[u8]], bump: u8) -> Address {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(DERIVE_DOMAIN);
    Address::from_bytes(hasher.finalize().into())
}

/// Derives the config record address for `(mint_x, mint_y, seed)`.
///
/// # Errors
///
/// Propagates [`AmmError::DerivationFailed`] from [`derive_address`].
pub fn pool_address(mint_x: &MintId, mint_y: &MintId, seed: u64) -> Result<(Address, u8)> {
    derive_address(&[
        POOL_TAG,
        &mint_x.as_bytes(),
        &mint_y.as_bytes(),
        &seed.to_le_bytes(),
    ])
}

/// Derives the LP mint address for a pool.
///
/// # Errors
///
/// Propagates [`AmmError::DerivationFailed`] from [`derive_address`].
pub fn lp_mint_address(pool: &Address) -> Result<(Address, u8)> {
    derive_address(&[LP_MINT_TAG, &pool.as_bytes()])
}

/// Derives the vault address for one mint of a pool.
///
/// # Errors
///
/// Propagates [`AmmError::DerivationFailed`] from [`derive_address`].
pub fn vault_address(mint: &MintId, pool: &Address) -> Result<(Address, u8)> {
    derive_address(&[VAULT_TAG, &mint.as_bytes(), &pool.as_bytes()])
}
