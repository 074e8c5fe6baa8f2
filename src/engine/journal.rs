//! All-or-nothing staging of record mutations.

use std::collections::BTreeMap;

use crate::address::Address;
use crate::domain::{Amount, LpTokens, MintId};
use crate::error::{AmmError, Result};
use crate::state::TokenBalances;

use super::Pool;

/// One record mutation awaiting commit.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StagedOp {
    /// Take `amount` of `mint` from `holder`'s external balance.
    DebitHolder {
        mint: MintId,
        holder: Address,
        amount: Amount,
    },
    /// Give `amount` of `mint` to `holder`'s external balance.
    CreditHolder {
        mint: MintId,
        holder: Address,
        amount: Amount,
    },
    /// Grow the pool's X reserve.
    CreditVaultX { amount: Amount },
    /// Grow the pool's Y reserve.
    CreditVaultY { amount: Amount },
    /// Shrink the pool's X reserve.
    DebitVaultX { amount: Amount },
    /// Shrink the pool's Y reserve.
    DebitVaultY { amount: Amount },
    /// Mint LP shares to `holder`.
    MintLp { holder: Address, amount: LpTokens },
    /// Burn LP shares from `holder`.
    BurnLp { holder: Address, amount: LpTokens },
}

/// Staged mutations for one operation.
///
/// The engine computes an operation's full effect, stages every
/// resulting mutation here, and calls [`commit`](Self::commit) once.
/// Commit replays the staged ops against working copies — a cloned pool
/// and a scratch view of the touched balance cells — so that any
/// failure (insufficient funds, overflow, authority mismatch) surfaces
/// before a single live record has changed. Only a fully validated
/// journal is published.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    ops: Vec<StagedOp>,
}

impl Journal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stage(&mut self, op: StagedOp) {
        self.ops.push(op);
    }

    /// Validates every staged mutation, then publishes all of them.
    ///
    /// On any `Err` the live `pool` and `balances` are untouched.
    pub(crate) fn commit(self, pool: &mut Pool, balances: &mut TokenBalances) -> Result<()> {
        let mut staged_pool = pool.clone();
        let authority = staged_pool.address();
        // Scratch cells: only the balances this journal touches, seeded
        // lazily from the live table.
        let mut cells: BTreeMap<(MintId, Address), Amount> = BTreeMap::new();

        for op in &self.ops {
            match *op {
                StagedOp::DebitHolder { mint, holder, amount } => {
                    let current = cells
                        .get(&(mint, holder))
                        .copied()
                        .unwrap_or_else(|| balances.balance_of(&mint, &holder));
                    let next = current
                        .checked_sub(&amount)
                        .ok_or(AmmError::InsufficientFunds)?;
                    cells.insert((mint, holder), next);
                }
                StagedOp::CreditHolder { mint, holder, amount } => {
                    let current = cells
                        .get(&(mint, holder))
                        .copied()
                        .unwrap_or_else(|| balances.balance_of(&mint, &holder));
                    let next = current
                        .checked_add(&amount)
                        .ok_or(AmmError::Overflow("token balance overflow"))?;
                    cells.insert((mint, holder), next);
                }
                StagedOp::CreditVaultX { amount } => {
                    staged_pool.vaults_mut().credit_x(&authority, amount)?;
                }
                StagedOp::CreditVaultY { amount } => {
                    staged_pool.vaults_mut().credit_y(&authority, amount)?;
                }
                StagedOp::DebitVaultX { amount } => {
                    staged_pool.vaults_mut().debit_x(&authority, amount)?;
                }
                StagedOp::DebitVaultY { amount } => {
                    staged_pool.vaults_mut().debit_y(&authority, amount)?;
                }
                StagedOp::MintLp { holder, amount } => {
                    staged_pool.lp_ledger_mut().mint_to(&authority, holder, amount)?;
                }
                StagedOp::BurnLp { holder, amount } => {
                    staged_pool.lp_ledger_mut().burn_from(&authority, &holder, amount)?;
                }
            }
        }

        *pool = staged_pool;
        for ((mint, holder), amount) in cells {
            balances.put(mint, holder, amount);
        }
        Ok(())
    }
}
