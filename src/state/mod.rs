//! Persistent records custodied by the engine.
//!
//! Three record types are created once by Initialize and live forever:
//! [`PoolConfig`] (the pool descriptor), [`ReserveVaultPair`] (the two
//! custody balances), and [`LpLedger`] (LP share supply and holdings).
//! [`TokenBalances`] is the explicit external balance table standing in
//! for the surrounding token-custody runtime; operations receive it by
//! mutable reference for exactly the duration of one call.

mod balances;
mod lp_ledger;
mod pool_config;
mod reserve_vaults;

pub use balances::TokenBalances;
pub use lp_ledger::LpLedger;
pub use pool_config::PoolConfig;
pub use reserve_vaults::ReserveVaultPair;
