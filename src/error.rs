//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error aborts the whole operation: by the time an
//! `Err` reaches the caller, no pool record, vault balance, or LP ledger
//! entry has been mutated.

use core::fmt;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// The unified error enum for every engine operation.
///
/// Variants group into the taxonomy the engine exposes to callers:
///
/// - **Validation** — [`InvalidFee`](Self::InvalidFee),
///   [`InvalidMintPair`](Self::InvalidMintPair),
///   [`ZeroAmount`](Self::ZeroAmount),
///   [`ZeroLiquidity`](Self::ZeroLiquidity)
/// - **Arithmetic** — [`Overflow`](Self::Overflow),
///   [`Underflow`](Self::Underflow),
///   [`DivisionByZero`](Self::DivisionByZero)
/// - **Outcome bounds** — [`SlippageExceeded`](Self::SlippageExceeded)
/// - **Balances** — [`InsufficientLiquidity`](Self::InsufficientLiquidity),
///   [`InsufficientFunds`](Self::InsufficientFunds)
/// - **Lifecycle** — [`DuplicatePool`](Self::DuplicatePool),
///   [`UnknownPool`](Self::UnknownPool),
///   [`DerivationFailed`](Self::DerivationFailed)
/// - **Custody** — [`UnauthorizedWrite`](Self::UnauthorizedWrite)
///
/// Variants carry a `&'static str` where the same variant is produced
/// from more than one site, so callers and test failures can tell the
/// sites apart without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    /// Fee rate above 10 000 basis points (more than 100%).
    InvalidFee,
    /// The two pool mints are not distinct.
    InvalidMintPair(&'static str),
    /// An operation amount that must be non-zero was zero.
    ZeroAmount(&'static str),
    /// A deposit resolved to zero on one side, or would mint zero LP.
    ZeroLiquidity,
    /// Arithmetic overflow in an intermediate or final value.
    Overflow(&'static str),
    /// Arithmetic underflow (subtraction below zero).
    Underflow(&'static str),
    /// Division by a zero denominator.
    DivisionByZero,
    /// Computed output fell below the caller's minimum.
    SlippageExceeded,
    /// LP amount exceeds the holder's balance (or the pool's supply).
    InsufficientLiquidity,
    /// A token debit exceeds the available balance.
    InsufficientFunds,
    /// A pool with the same `(mint_x, mint_y, seed)` already exists.
    DuplicatePool,
    /// No pool is registered at the given address.
    UnknownPool,
    /// No bump in `0..=255` produced an engine-derived address.
    DerivationFailed,
    /// A vault or LP ledger write was attempted without pool authority.
    UnauthorizedWrite(&'static str),
}

impl fmt::Display for AmmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFee => write!(f, "fee rate exceeds 10000 basis points"),
            Self::InvalidMintPair(ctx) => write!(f, "invalid mint pair: {ctx}"),
            Self::ZeroAmount(ctx) => write!(f, "zero amount: {ctx}"),
            Self::ZeroLiquidity => write!(f, "deposit would mint zero liquidity"),
            Self::Overflow(ctx) => write!(f, "arithmetic overflow: {ctx}"),
            Self::Underflow(ctx) => write!(f, "arithmetic underflow: {ctx}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::SlippageExceeded => write!(f, "output below the caller's minimum"),
            Self::InsufficientLiquidity => write!(f, "LP amount exceeds available balance"),
            Self::InsufficientFunds => write!(f, "token debit exceeds available balance"),
            Self::DuplicatePool => write!(f, "pool already exists for this mint pair and seed"),
            Self::UnknownPool => write!(f, "no pool registered at this address"),
            Self::DerivationFailed => write!(f, "no valid bump found in derivation range"),
            Self::UnauthorizedWrite(ctx) => write!(f, "unauthorized write: {ctx}"),
        }
    }
}

impl std::error::Error for AmmError {}
