//! # cpamm
//!
//! Constant-product AMM pool engine: custody two token reserves, issue
//! proportional LP shares against them, and price swaps from the
//! reserves alone using integer-only arithmetic.
//!
//! The crate models a single pool's full lifecycle — Initialize,
//! Deposit, Withdraw, Swap — with all-or-nothing atomicity per
//! operation. There is no I/O and no runtime dependency: callers hold a
//! [`PoolEngine`](engine::PoolEngine) plus a
//! [`TokenBalances`](state::TokenBalances) table and drive it
//! synchronously.
//!
//! ## Create a pool, deposit, and swap
//!
//! ```rust
//! use cpamm::address::Address;
//! use cpamm::domain::{Amount, BasisPoints, MintId, SwapDirection};
//! use cpamm::engine::PoolEngine;
//! use cpamm::state::TokenBalances;
//!
//! // 1. Two token mints and a funded trader
//! let mint_x = MintId::from_bytes([1u8; 32]);
//! let mint_y = MintId::from_bytes([2u8; 32]);
//! let trader = Address::from_bytes([7u8; 32]);
//!
//! let mut balances = TokenBalances::new();
//! balances.credit(mint_x, trader, Amount::new(2_000)).expect("fund");
//! balances.credit(mint_y, trader, Amount::new(1_000)).expect("fund");
//!
//! // 2. Initialize a pool with a 1% swap fee
//! let mut engine = PoolEngine::new();
//! let pool = engine
//!     .initialize(mint_x, mint_y, 0, BasisPoints::new(100))
//!     .expect("pool created");
//!
//! // 3. Seed liquidity (first deposit mints the product of the amounts)
//! let deposit = engine
//!     .deposit(&pool, &mut balances, trader, Amount::new(1_000), Amount::new(1_000))
//!     .expect("deposit");
//! assert_eq!(deposit.lp_minted().get(), 1_000_000);
//!
//! // 4. Swap 100 X for Y
//! let swap = engine
//!     .swap(&pool, &mut balances, trader, SwapDirection::XtoY, Amount::new(100), Amount::ZERO)
//!     .expect("swap");
//! assert!(swap.amount_out().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  holds PoolEngine + TokenBalances
//! └──────┬──────┘
//!        │ initialize / deposit / withdraw / swap
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  validates, prices, stages, commits atomically
//! └──────┬──────┘
//!        │ journaled record writes
//!        ▼
//! ┌─────────────┐
//! │   State      │  PoolConfig, ReserveVaultPair, LpLedger, TokenBalances
//! └──────┬──────┘
//!        │ derived identities
//!        ▼
//! ┌─────────────┐
//! │   Address    │  deterministic, engine-owned record addressing
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), [`MintPair`](domain::MintPair), operation outcomes |
//! | [`address`] | [`Address`](address::Address) and deterministic record derivation |
//! | [`state`] | Persistent records: [`PoolConfig`](state::PoolConfig), [`ReserveVaultPair`](state::ReserveVaultPair), [`LpLedger`](state::LpLedger), [`TokenBalances`](state::TokenBalances) |
//! | [`engine`] | [`PoolEngine`](engine::PoolEngine): the four operations, journaled |
//! | [`math`]   | Wide-intermediate checked arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod address;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod state;
