//! The pool engine: operation processing over persistent records.
//!
//! [`PoolEngine`] owns the registry of pools and executes the four
//! operations — Initialize, Deposit, Withdraw, Swap — each as a single
//! atomic unit. Operation math is computed first against a read-only
//! view; the resulting mutations are staged in a journal, validated in
//! full, and only then published. A failure at any point leaves every
//! record exactly as it was.
//!
//! # Operation Flow
//!
//! ```text
//! ┌──────────┐  initialize / deposit / withdraw / swap
//! │  Caller   │ ──────────────────────────────────────┐
//! └──────────┘                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ PoolEngine   validate inputs, compute state deltas   │
//! └──────┬──────────────────────────────────────────────┘
//!        │ staged ops
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ Journal      validate all staged mutations, commit   │
//! └──────┬──────────────────────────────────────────────┘
//!        │ all-or-nothing
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ Records      PoolConfig · ReserveVaultPair · LpLedger│
//! └─────────────────────────────────────────────────────┘
//! ```

mod journal;
mod pool;
mod pool_engine;

#[cfg(test)]
mod proptest_properties;

pub use pool::Pool;
pub use pool_engine::PoolEngine;
