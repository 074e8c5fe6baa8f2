//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use cpamm::prelude::*;
//! ```
//!
//! This re-exports the most frequently used domain types, the persistent
//! record types, the engine, and the error types so that consumers don't
//! need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, BasisPoints, DepositOutcome, LpTokens, MintId, MintPair, Rounding, SwapDirection,
    SwapOutcome, WithdrawOutcome,
};

// Re-export addressing
pub use crate::address::Address;

// Re-export persistent records
pub use crate::state::{LpLedger, PoolConfig, ReserveVaultPair, TokenBalances};

// Re-export the engine
pub use crate::engine::{Pool, PoolEngine};

// Re-export error types
pub use crate::error::{AmmError, Result};
