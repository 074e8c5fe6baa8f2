//! Deterministic record addressing.
//!
//! Every persistent record the engine owns — the pool config, the LP
//! mint, the two vaults — lives at an address derived from stable seeds
//! by [`derive_address`]. Derived addresses carry an intrinsic engine-ownership
//! marker (see [`Address::is_engine_derived`]), so storage named this
//! way can never collide with an externally held key; the engine checks
//! the marker, plus an explicit authority match, on every mutation.

mod address;
mod deriver;

pub use address::Address;
pub use deriver::{
    derive_address, lp_mint_address, pool_address, vault_address, LP_MINT_TAG, POOL_TAG, VAULT_TAG,
};
