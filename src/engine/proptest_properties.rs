//! Property-based tests using `proptest` for engine invariant validation.
//!
//! Covers five properties:
//!
//! 1. **Swap reversibility** — round-trip X→Y→X returns ≤ original.
//! 2. **Invariant preservation** — reserve product non-decreasing after swaps.
//! 3. **Ratio preservation** — non-initial deposits keep the reserve ratio.
//! 4. **Liquidity conservation** — deposit then withdraw returns ≤ deposited.
//! 5. **Ledger consistency** — the LP ledger audits after random op sequences.

use proptest::prelude::*;

use crate::address::Address;
use crate::domain::{Amount, BasisPoints, LpTokens, MintId, SwapDirection};
use crate::state::TokenBalances;

use super::PoolEngine;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn mint_x() -> MintId {
    MintId::from_bytes([1u8; 32])
}

fn mint_y() -> MintId {
    MintId::from_bytes([2u8; 32])
}

fn trader() -> Address {
    Address::from_bytes([7u8; 32])
}

/// Engine with one pool seeded at `(rx, ry)` and a generously funded trader.
fn seeded(rx: u64, ry: u64, fee: u16) -> Option<(PoolEngine, Address, TokenBalances)> {
    let mut engine = PoolEngine::new();
    let pool = engine
        .initialize(mint_x(), mint_y(), 0, BasisPoints::new(fee))
        .ok()?;
    let mut balances = TokenBalances::new();
    balances
        .credit(mint_x(), trader(), Amount::new(u64::MAX / 2))
        .ok()?;
    balances
        .credit(mint_y(), trader(), Amount::new(u64::MAX / 2))
        .ok()?;
    engine
        .deposit(&pool, &mut balances, trader(), Amount::new(rx), Amount::new(ry))
        .ok()?;
    Some((engine, pool, balances))
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 10_000_000]: keeps the initial LP
/// product inside u64 and away from degenerate dust pools.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=10_000_000u64
}

/// Fee rates from free to 10%.
fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..=1_000u16
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_swap_loses_value(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let Some((mut engine, pool, mut balances)) = seeded(rx, ry, fee) else {
            return Ok(());
        };
        let swap_in = (rx / 1_000).max(1);

        let Ok(forward) = engine.swap(
            &pool,
            &mut balances,
            trader(),
            SwapDirection::XtoY,
            Amount::new(swap_in),
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        if forward.amount_out().is_zero() {
            return Ok(());
        }
        let Ok(back) = engine.swap(
            &pool,
            &mut balances,
            trader(),
            SwapDirection::YtoX,
            forward.amount_out(),
            Amount::ZERO,
        ) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out().get(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserve_product_non_decreasing(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let Some((mut engine, pool, mut balances)) = seeded(rx, ry, fee) else {
            return Ok(());
        };
        let swap_in = (rx / 500).max(1);
        let k_before = u128::from(rx) * u128::from(ry);

        for step in 0..6u8 {
            let direction = if step % 2 == 0 {
                SwapDirection::XtoY
            } else {
                SwapDirection::YtoX
            };
            if engine
                .swap(
                    &pool,
                    &mut balances,
                    trader(),
                    direction,
                    Amount::new(swap_in),
                    Amount::ZERO,
                )
                .is_err()
            {
                break;
            }
        }

        let Ok(state) = engine.pool(&pool) else {
            return Ok(());
        };
        let k_after = state.reserve_x().widening_mul(&state.reserve_y());
        prop_assert!(
            k_after >= k_before,
            "reserve product should not shrink: k_after={} < k_before={}",
            k_after, k_before
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Ratio Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_preserves_ratio(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        dx in 1u64..=1_000_000u64,
        dy in 1u64..=1_000_000u64,
    ) {
        let Some((mut engine, pool, mut balances)) = seeded(rx, ry, 0) else {
            return Ok(());
        };
        let Ok(outcome) = engine.deposit(
            &pool,
            &mut balances,
            trader(),
            Amount::new(dx),
            Amount::new(dy),
        ) else {
            return Ok(());
        };

        prop_assert!(outcome.actual_x().get() <= dx);
        prop_assert!(outcome.actual_y().get() <= dy);

        // The taken amounts match the pre-existing ratio to within one
        // unit of floor-rounding: |actual_x·ry − actual_y·rx| < max(rx, ry).
        let lhs = u128::from(outcome.actual_x().get()) * u128::from(ry);
        let rhs = u128::from(outcome.actual_y().get()) * u128::from(rx);
        let diff = lhs.abs_diff(rhs);
        prop_assert!(
            diff < u128::from(rx.max(ry)),
            "deposit skewed the ratio: |{lhs} - {rhs}| = {diff}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_then_withdraw_never_profits(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        dx in 1u64..=1_000_000u64,
        dy in 1u64..=1_000_000u64,
    ) {
        let Some((mut engine, pool, mut balances)) = seeded(rx, ry, 0) else {
            return Ok(());
        };
        let late = Address::from_bytes([9u8; 32]);
        let Ok(()) = balances.credit(mint_x(), late, Amount::new(dx)) else {
            return Ok(());
        };
        let Ok(()) = balances.credit(mint_y(), late, Amount::new(dy)) else {
            return Ok(());
        };

        let Ok(deposited) = engine.deposit(
            &pool,
            &mut balances,
            late,
            Amount::new(dx),
            Amount::new(dy),
        ) else {
            return Ok(());
        };
        let Ok(withdrawn) = engine.withdraw(
            &pool,
            &mut balances,
            late,
            deposited.lp_minted(),
        ) else {
            return Ok(());
        };

        prop_assert!(
            withdrawn.amount_x() <= deposited.actual_x(),
            "withdraw returned more X than deposited: {} > {}",
            withdrawn.amount_x(), deposited.actual_x()
        );
        prop_assert!(
            withdrawn.amount_y() <= deposited.actual_y(),
            "withdraw returned more Y than deposited: {} > {}",
            withdrawn.amount_y(), deposited.actual_y()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Ledger Consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_ledger_audits_after_random_ops(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        ops in proptest::collection::vec((0u8..4u8, 1u64..=100_000u64), 1..20),
    ) {
        let Some((mut engine, pool, mut balances)) = seeded(rx, ry, fee) else {
            return Ok(());
        };

        for (kind, amount) in ops {
            let result = match kind {
                0 => engine
                    .deposit(
                        &pool,
                        &mut balances,
                        trader(),
                        Amount::new(amount),
                        Amount::new(amount),
                    )
                    .map(|_| ()),
                1 => {
                    let Ok(state) = engine.pool(&pool) else {
                        return Ok(());
                    };
                    let burn = state.lp_balance_of(&trader()).get().min(amount);
                    engine
                        .withdraw(&pool, &mut balances, trader(), LpTokens::new(burn))
                        .map(|_| ())
                }
                2 => engine
                    .swap(
                        &pool,
                        &mut balances,
                        trader(),
                        SwapDirection::XtoY,
                        Amount::new(amount),
                        Amount::ZERO,
                    )
                    .map(|_| ()),
                _ => engine
                    .swap(
                        &pool,
                        &mut balances,
                        trader(),
                        SwapDirection::YtoX,
                        Amount::new(amount),
                        Amount::ZERO,
                    )
                    .map(|_| ()),
            };
            // Rejected ops are fine; they must simply leave no trace.
            drop(result);

            let Ok(state) = engine.pool(&pool) else {
                return Ok(());
            };
            prop_assert!(state.audit().is_ok(), "ledger sum diverged from supply");
        }
    }
}
