//! The four pool operations.

use std::collections::BTreeMap;

use crate::address::Address;
use crate::domain::{
    Amount, BasisPoints, DepositOutcome, LpTokens, MintId, Rounding, SwapDirection, SwapOutcome,
    WithdrawOutcome,
};
use crate::error::{AmmError, Result};
use crate::math::{div_wide, mul_div};
use crate::state::TokenBalances;

use super::journal::{Journal, StagedOp};
use super::Pool;

/// The operation processor over a registry of pools.
///
/// Each public method is one atomic operation: it validates inputs,
/// computes the full effect against the current state, stages every
/// mutation in a journal, and commits all of them or none. External
/// token balances live in a [`TokenBalances`] table passed in per call;
/// pool records live in the engine itself.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{Amount, BasisPoints, MintId};
/// use cpamm::engine::PoolEngine;
/// use cpamm::state::TokenBalances;
/// use cpamm::address::Address;
///
/// let mint_x = MintId::from_bytes([1u8; 32]);
/// let mint_y = MintId::from_bytes([2u8; 32]);
/// let depositor = Address::from_bytes([7u8; 32]);
///
/// let mut balances = TokenBalances::new();
/// balances.credit(mint_x, depositor, Amount::new(100)).expect("credit");
/// balances.credit(mint_y, depositor, Amount::new(10)).expect("credit");
///
/// let mut engine = PoolEngine::new();
/// let pool = engine
///     .initialize(mint_x, mint_y, 0, BasisPoints::new(100))
///     .expect("initialize");
/// let outcome = engine
///     .deposit(&pool, &mut balances, depositor, Amount::new(100), Amount::new(10))
///     .expect("deposit");
/// assert_eq!(outcome.lp_minted().get(), 1_000);
/// ```
#[derive(Debug, Default)]
pub struct PoolEngine {
    pools: BTreeMap<Address, Pool>,
}

impl PoolEngine {
    /// Creates an engine with no pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Looks up a pool by address.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownPool`] if no pool lives at `address`.
    pub fn pool(&self, address: &Address) -> Result<&Pool> {
        self.pools.get(address).ok_or(AmmError::UnknownPool)
    }

    /// Creates a new pool and returns its address.
    ///
    /// Derives the pool's records from `(mint_x, mint_y, seed)`, so the
    /// same inputs always name the same pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidMintPair`] if the mints are equal.
    /// - [`AmmError::InvalidFee`] if `fee` exceeds 10 000 basis points.
    /// - [`AmmError::DuplicatePool`] if the derived address is already
    ///   registered. No record is created on any failure.
    pub fn initialize(
        &mut self,
        mint_x: MintId,
        mint_y: MintId,
        seed: u64,
        fee: BasisPoints,
    ) -> Result<Address> {
        let pool = Pool::create(mint_x, mint_y, seed, fee)?;
        let address = pool.address();
        if self.pools.contains_key(&address) {
            return Err(AmmError::DuplicatePool);
        }
        self.pools.insert(address, pool);
        Ok(address)
    }

    /// Adds liquidity and mints LP shares to `depositor`.
    ///
    /// This is the exact-cap contract: the caller states the most of
    /// each token they are willing to supply, and the engine takes the
    /// largest ratio-matched portion of it. The first deposit sets the
    /// ratio and mints `desired_x × desired_y` shares; every later
    /// deposit preserves the existing ratio, floor-dividing the implied
    /// side, and mints `total_supply × actual / reserve` computed from
    /// the binding side.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownPool`] if `pool` is not registered.
    /// - [`AmmError::ZeroLiquidity`] if either first-deposit amount is
    ///   zero, or a later deposit's ratio-matched portion or minted
    ///   share amount rounds to zero.
    /// - [`AmmError::InsufficientFunds`] if the depositor cannot cover
    ///   the actual amounts.
    /// - [`AmmError::Overflow`] on arithmetic overflow.
    ///
    /// Any failure leaves every record untouched.
    pub fn deposit(
        &mut self,
        pool: &Address,
        balances: &mut TokenBalances,
        depositor: Address,
        desired_x: Amount,
        desired_y: Amount,
    ) -> Result<DepositOutcome> {
        let state = self.pool(pool)?;
        let (actual_x, actual_y, minted) = deposit_amounts(state, desired_x, desired_y)?;
        let mint_x = state.config().mint_x();
        let mint_y = state.config().mint_y();

        let mut journal = Journal::new();
        journal.stage(StagedOp::DebitHolder {
            mint: mint_x,
            holder: depositor,
            amount: actual_x,
        });
        journal.stage(StagedOp::DebitHolder {
            mint: mint_y,
            holder: depositor,
            amount: actual_y,
        });
        journal.stage(StagedOp::CreditVaultX { amount: actual_x });
        journal.stage(StagedOp::CreditVaultY { amount: actual_y });
        journal.stage(StagedOp::MintLp {
            holder: depositor,
            amount: minted,
        });

        let state = self.pools.get_mut(pool).ok_or(AmmError::UnknownPool)?;
        journal.commit(state, balances)?;
        Ok(DepositOutcome::new(actual_x, actual_y, minted))
    }

    /// Burns `lp_amount` shares and pays out the proportional reserves.
    ///
    /// Both payouts floor-divide, so a withdrawer never receives more
    /// than their exact share; sub-unit dust stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownPool`] if `pool` is not registered.
    /// - [`AmmError::ZeroAmount`] if `lp_amount` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `lp_amount` exceeds the
    ///   withdrawer's balance.
    ///
    /// Any failure leaves every record untouched.
    pub fn withdraw(
        &mut self,
        pool: &Address,
        balances: &mut TokenBalances,
        withdrawer: Address,
        lp_amount: LpTokens,
    ) -> Result<WithdrawOutcome> {
        let state = self.pool(pool)?;
        let (amount_x, amount_y) = withdraw_amounts(state, &withdrawer, lp_amount)?;
        let mint_x = state.config().mint_x();
        let mint_y = state.config().mint_y();

        let mut journal = Journal::new();
        journal.stage(StagedOp::BurnLp {
            holder: withdrawer,
            amount: lp_amount,
        });
        journal.stage(StagedOp::DebitVaultX { amount: amount_x });
        journal.stage(StagedOp::DebitVaultY { amount: amount_y });
        journal.stage(StagedOp::CreditHolder {
            mint: mint_x,
            holder: withdrawer,
            amount: amount_x,
        });
        journal.stage(StagedOp::CreditHolder {
            mint: mint_y,
            holder: withdrawer,
            amount: amount_y,
        });

        let state = self.pools.get_mut(pool).ok_or(AmmError::UnknownPool)?;
        journal.commit(state, balances)?;
        Ok(WithdrawOutcome::new(amount_x, amount_y, lp_amount))
    }

    /// Trades `amount_in` of one reserve token for the other.
    ///
    /// The fee is carved from the input before pricing and accrues to
    /// the reserves. The retained-reserve term is ceiling-divided, so
    /// the reserve product never decreases across a swap.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownPool`] if `pool` is not registered.
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is empty.
    /// - [`AmmError::SlippageExceeded`] if the output falls below
    ///   `min_out`.
    /// - [`AmmError::InsufficientFunds`] if the trader cannot cover
    ///   `amount_in`.
    ///
    /// Any failure leaves every record untouched.
    pub fn swap(
        &mut self,
        pool: &Address,
        balances: &mut TokenBalances,
        trader: Address,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapOutcome> {
        let state = self.pool(pool)?;
        let (amount_out, fee) = swap_quote(state, direction, amount_in)?;
        if amount_out < min_out {
            return Err(AmmError::SlippageExceeded);
        }
        let mint_x = state.config().mint_x();
        let mint_y = state.config().mint_y();
        let (mint_in, mint_out) = match direction {
            SwapDirection::XtoY => (mint_x, mint_y),
            SwapDirection::YtoX => (mint_y, mint_x),
        };

        let mut journal = Journal::new();
        journal.stage(StagedOp::DebitHolder {
            mint: mint_in,
            holder: trader,
            amount: amount_in,
        });
        match direction {
            SwapDirection::XtoY => {
                journal.stage(StagedOp::CreditVaultX { amount: amount_in });
                journal.stage(StagedOp::DebitVaultY { amount: amount_out });
            }
            SwapDirection::YtoX => {
                journal.stage(StagedOp::CreditVaultY { amount: amount_in });
                journal.stage(StagedOp::DebitVaultX { amount: amount_out });
            }
        }
        journal.stage(StagedOp::CreditHolder {
            mint: mint_out,
            holder: trader,
            amount: amount_out,
        });

        let state = self.pools.get_mut(pool).ok_or(AmmError::UnknownPool)?;
        journal.commit(state, balances)?;
        SwapOutcome::new(direction, amount_in, amount_out, fee)
    }

    /// Quotes a swap's output without executing it.
    ///
    /// # Errors
    ///
    /// Same pricing errors as [`swap`](Self::swap), minus the slippage
    /// and funding checks.
    pub fn quote_out_for_in(
        &self,
        pool: &Address,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<Amount> {
        let state = self.pool(pool)?;
        let (amount_out, _) = swap_quote(state, direction, amount_in)?;
        Ok(amount_out)
    }
}

/// Computes `(actual_x, actual_y, lp_minted)` for a deposit.
fn deposit_amounts(
    pool: &Pool,
    desired_x: Amount,
    desired_y: Amount,
) -> Result<(Amount, Amount, LpTokens)> {
    let supply = pool.total_supply();
    if supply.is_zero() {
        if desired_x.is_zero() || desired_y.is_zero() {
            return Err(AmmError::ZeroLiquidity);
        }
        // Adopted initial-supply formula: the raw product of the two
        // deposited amounts, not their geometric mean.
        let product = desired_x.widening_mul(&desired_y);
        let minted = u64::try_from(product)
            .map_err(|_| AmmError::Overflow("initial LP supply exceeds u64"))?;
        return Ok((desired_x, desired_y, LpTokens::new(minted)));
    }

    let reserve_x = pool.reserve_x();
    let reserve_y = pool.reserve_y();
    let implied_y = mul_div(
        desired_x.get(),
        reserve_y.get(),
        reserve_x.get(),
        Rounding::Down,
    )?;

    // Take whichever side is the binding constraint; the other side's
    // implied amount never exceeds what the caller offered.
    let (actual_x, actual_y, binding_actual, binding_reserve) =
        if Amount::new(implied_y) <= desired_y {
            (desired_x, Amount::new(implied_y), desired_x, reserve_x)
        } else {
            let implied_x = mul_div(
                desired_y.get(),
                reserve_x.get(),
                reserve_y.get(),
                Rounding::Down,
            )?;
            (Amount::new(implied_x), desired_y, desired_y, reserve_y)
        };

    if actual_x.is_zero() || actual_y.is_zero() {
        return Err(AmmError::ZeroLiquidity);
    }
    let minted = mul_div(
        supply.get(),
        binding_actual.get(),
        binding_reserve.get(),
        Rounding::Down,
    )?;
    if minted == 0 {
        return Err(AmmError::ZeroLiquidity);
    }
    Ok((actual_x, actual_y, LpTokens::new(minted)))
}

/// Computes the floor-divided proportional payout for a withdrawal.
fn withdraw_amounts(
    pool: &Pool,
    withdrawer: &Address,
    lp_amount: LpTokens,
) -> Result<(Amount, Amount)> {
    if lp_amount.is_zero() {
        return Err(AmmError::ZeroAmount("withdraw share amount"));
    }
    if lp_amount > pool.lp_balance_of(withdrawer) {
        return Err(AmmError::InsufficientLiquidity);
    }
    // balance >= lp_amount > 0 implies supply > 0.
    let supply = pool.total_supply();
    let amount_x = mul_div(
        pool.reserve_x().get(),
        lp_amount.get(),
        supply.get(),
        Rounding::Down,
    )?;
    let amount_y = mul_div(
        pool.reserve_y().get(),
        lp_amount.get(),
        supply.get(),
        Rounding::Down,
    )?;
    Ok((Amount::new(amount_x), Amount::new(amount_y)))
}

/// Prices a swap: returns `(amount_out, fee)`.
///
/// The retained reserve `⌈reserve_in·reserve_out / (reserve_in +
/// net_in)⌉` is ceiling-divided so that `(reserve_in + net_in) ×
/// (reserve_out − amount_out)` never falls below the pre-swap product.
fn swap_quote(pool: &Pool, direction: SwapDirection, amount_in: Amount) -> Result<(Amount, Amount)> {
    if amount_in.is_zero() {
        return Err(AmmError::ZeroAmount("swap input"));
    }
    let (reserve_in, reserve_out) = pool.vaults().oriented(direction);
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let net_in = pool.config().net_of_fee(amount_in)?;
    let fee = amount_in
        .checked_sub(&net_in)
        .ok_or(AmmError::Underflow("fee exceeds swap input"))?;

    let product = reserve_in.widening_mul(&reserve_out);
    let denominator = u128::from(reserve_in.get()) + u128::from(net_in.get());
    let retained = div_wide(product, denominator, Rounding::Up)?;
    // retained <= reserve_out because denominator >= reserve_in.
    let retained = u64::try_from(retained)
        .map_err(|_| AmmError::Overflow("retained reserve exceeds u64"))?;
    let amount_out = reserve_out
        .checked_sub(&Amount::new(retained))
        .ok_or(AmmError::Underflow("swap output"))?;
    Ok((amount_out, fee))
}
