//! Integration tests exercising the full system through the public API:
//! pool lifecycle, liquidity round-trips, swap pricing, fee accrual, and
//! atomic rollback of rejected operations.

#![allow(clippy::panic)]

use cpamm::address::Address;
use cpamm::domain::{Amount, BasisPoints, LpTokens, MintId, SwapDirection};
use cpamm::engine::PoolEngine;
use cpamm::error::AmmError;
use cpamm::state::TokenBalances;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn mint_x() -> MintId {
    MintId::from_bytes([1u8; 32])
}

fn mint_y() -> MintId {
    MintId::from_bytes([2u8; 32])
}

fn alice() -> Address {
    Address::from_bytes([7u8; 32])
}

fn bob() -> Address {
    Address::from_bytes([8u8; 32])
}

fn fund(balances: &mut TokenBalances, who: Address, x: u64, y: u64) {
    let Ok(()) = balances.credit(mint_x(), who, Amount::new(x)) else {
        panic!("fund x");
    };
    let Ok(()) = balances.credit(mint_y(), who, Amount::new(y)) else {
        panic!("fund y");
    };
}

fn new_pool(fee: u16) -> (PoolEngine, Address) {
    let mut engine = PoolEngine::new();
    let Ok(pool) = engine.initialize(mint_x(), mint_y(), 0, BasisPoints::new(fee)) else {
        panic!("initialize");
    };
    (engine, pool)
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn initialize_then_reinitialize_same_identity_fails() {
    let (mut engine, pool) = new_pool(100);
    assert_eq!(
        engine.initialize(mint_x(), mint_y(), 0, BasisPoints::new(100)),
        Err(AmmError::DuplicatePool)
    );
    // A different seed opens a second pool over the same pair.
    let Ok(other) = engine.initialize(mint_x(), mint_y(), 1, BasisPoints::new(100)) else {
        panic!("second pool");
    };
    assert_ne!(pool, other);
    assert_eq!(engine.pool_count(), 2);
}

#[test]
fn invalid_fee_creates_no_records() {
    let mut engine = PoolEngine::new();
    assert_eq!(
        engine.initialize(mint_x(), mint_y(), 0, BasisPoints::new(10_001)),
        Err(AmmError::InvalidFee)
    );
    assert_eq!(engine.pool_count(), 0);
}

#[test]
fn pool_records_are_engine_derived() {
    let (engine, pool) = new_pool(100);
    let Ok(state) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    assert!(state.address().is_engine_derived());
    assert!(state.lp_mint().is_engine_derived());
    assert!(state.vaults().owner().is_engine_derived());
}

// ---------------------------------------------------------------------------
// Liquidity lifecycle
// ---------------------------------------------------------------------------

#[test]
fn seed_deposit_mints_the_amount_product() {
    let (mut engine, pool) = new_pool(100);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 100, 10);

    let Ok(outcome) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(100),
        Amount::new(10),
    ) else {
        panic!("deposit");
    };
    assert_eq!(outcome.lp_minted(), LpTokens::new(1_000));
}

#[test]
fn six_decimal_seed_deposit() {
    let x = 100_000_000u64;
    let y = 10_000_000u64;
    let (mut engine, pool) = new_pool(100);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), x, y);

    let Ok(outcome) =
        engine.deposit(&pool, &mut balances, alice(), Amount::new(x), Amount::new(y))
    else {
        panic!("deposit");
    };
    assert_eq!(outcome.lp_minted(), LpTokens::new(x * y));

    let Ok(state) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    assert_eq!(state.reserve_x(), Amount::new(x));
    assert_eq!(state.reserve_y(), Amount::new(y));
}

#[test]
fn skewed_second_deposit_is_capped_to_the_pool_ratio() {
    let (mut engine, pool) = new_pool(100);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 100_000_000, 10_000_000);
    fund(&mut balances, bob(), 50_000_000, 60_000_000);

    let Ok(_) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(100_000_000),
        Amount::new(10_000_000),
    ) else {
        panic!("seed deposit");
    };

    let Ok(outcome) = engine.deposit(
        &pool,
        &mut balances,
        bob(),
        Amount::new(50_000_000),
        Amount::new(60_000_000),
    ) else {
        panic!("second deposit");
    };
    assert!(outcome.actual_x() <= Amount::new(50_000_000));
    assert!(outcome.actual_y() <= Amount::new(60_000_000));

    let Ok(state) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    // 10:1 before, 10:1 after.
    assert_eq!(state.reserve_x().get(), 10 * state.reserve_y().get());
    // Bob keeps whatever the ratio match left untaken.
    assert_eq!(
        balances.balance_of(&mint_y(), &bob()),
        Amount::new(55_000_000)
    );
}

#[test]
fn two_holders_withdraw_their_shares() {
    let (mut engine, pool) = new_pool(0);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 1_000, 1_000);
    fund(&mut balances, bob(), 500, 500);

    let Ok(first) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(1_000),
        Amount::new(1_000),
    ) else {
        panic!("alice deposit");
    };
    let Ok(second) = engine.deposit(
        &pool,
        &mut balances,
        bob(),
        Amount::new(500),
        Amount::new(500),
    ) else {
        panic!("bob deposit");
    };
    // Bob holds a third of the pool.
    assert_eq!(second.lp_minted().get() * 2, first.lp_minted().get());

    let Ok(outcome) = engine.withdraw(&pool, &mut balances, bob(), second.lp_minted()) else {
        panic!("bob withdraw");
    };
    assert_eq!(outcome.amount_x(), Amount::new(500));
    assert_eq!(outcome.amount_y(), Amount::new(500));

    let Ok(state) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    assert_eq!(state.lp_holder_count(), 1);
    assert!(state.audit().is_ok());
}

#[test]
fn full_withdraw_drains_the_pool() {
    let (mut engine, pool) = new_pool(100);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 100, 10);

    let Ok(outcome) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(100),
        Amount::new(10),
    ) else {
        panic!("deposit");
    };
    let Ok(_) = engine.withdraw(&pool, &mut balances, alice(), outcome.lp_minted()) else {
        panic!("withdraw");
    };

    let Ok(state) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    assert_eq!(state.reserve_x(), Amount::ZERO);
    assert_eq!(state.reserve_y(), Amount::ZERO);
    assert_eq!(state.total_supply(), LpTokens::ZERO);
    assert_eq!(balances.balance_of(&mint_x(), &alice()), Amount::new(100));
    assert_eq!(balances.balance_of(&mint_y(), &alice()), Amount::new(10));
}

// ---------------------------------------------------------------------------
// Trading
// ---------------------------------------------------------------------------

#[test]
fn swap_moves_tokens_and_respects_the_curve() {
    let (mut engine, pool) = new_pool(100);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 10_000, 10_000);
    fund(&mut balances, bob(), 1_000, 0);

    let Ok(_) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(10_000),
        Amount::new(10_000),
    ) else {
        panic!("seed deposit");
    };

    let Ok(outcome) = engine.swap(
        &pool,
        &mut balances,
        bob(),
        SwapDirection::XtoY,
        Amount::new(1_000),
        Amount::new(800),
    ) else {
        panic!("swap");
    };
    assert!(outcome.amount_out() >= Amount::new(800));
    assert_eq!(balances.balance_of(&mint_x(), &bob()), Amount::ZERO);
    assert_eq!(balances.balance_of(&mint_y(), &bob()), outcome.amount_out());

    let Ok(state) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    // Gross input (fee included) lands in the vault; product never shrinks.
    assert_eq!(state.reserve_x(), Amount::new(11_000));
    assert!(state.reserve_x().widening_mul(&state.reserve_y()) >= 100_000_000);
}

#[test]
fn round_trip_swap_never_creates_value() {
    let (mut engine, pool) = new_pool(30);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 100_000, 100_000);
    fund(&mut balances, bob(), 5_000, 0);

    let Ok(_) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(100_000),
        Amount::new(100_000),
    ) else {
        panic!("seed deposit");
    };

    let Ok(forward) = engine.swap(
        &pool,
        &mut balances,
        bob(),
        SwapDirection::XtoY,
        Amount::new(5_000),
        Amount::ZERO,
    ) else {
        panic!("forward swap");
    };
    let Ok(back) = engine.swap(
        &pool,
        &mut balances,
        bob(),
        SwapDirection::YtoX,
        forward.amount_out(),
        Amount::ZERO,
    ) else {
        panic!("reverse swap");
    };
    assert!(back.amount_out() <= Amount::new(5_000));
    assert!(balances.balance_of(&mint_x(), &bob()) <= Amount::new(5_000));
}

#[test]
fn fees_accrue_to_liquidity_providers() {
    let (mut engine, pool) = new_pool(1_000);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 10_000, 10_000);
    fund(&mut balances, bob(), 10_000, 10_000);

    let Ok(minted) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(10_000),
        Amount::new(10_000),
    ) else {
        panic!("seed deposit");
    };

    // A busy trading day at a 10% fee.
    for _ in 0..10 {
        let Ok(forward) = engine.swap(
            &pool,
            &mut balances,
            bob(),
            SwapDirection::XtoY,
            Amount::new(1_000),
            Amount::ZERO,
        ) else {
            panic!("forward swap");
        };
        let Ok(_) = engine.swap(
            &pool,
            &mut balances,
            bob(),
            SwapDirection::YtoX,
            forward.amount_out(),
            Amount::ZERO,
        ) else {
            panic!("reverse swap");
        };
    }

    let Ok(outcome) = engine.withdraw(&pool, &mut balances, alice(), minted.lp_minted()) else {
        panic!("withdraw");
    };
    // The sole LP exits with strictly more value than they put in.
    let total_out = outcome.amount_x().get() + outcome.amount_y().get();
    assert!(total_out > 20_000, "expected fee growth, got {total_out}");
}

// ---------------------------------------------------------------------------
// Atomicity
// ---------------------------------------------------------------------------

#[test]
fn rejected_operations_leave_no_trace() {
    let (mut engine, pool) = new_pool(100);
    let mut balances = TokenBalances::new();
    fund(&mut balances, alice(), 100, 10);
    fund(&mut balances, bob(), 3, 0);

    let Ok(_) = engine.deposit(
        &pool,
        &mut balances,
        alice(),
        Amount::new(100),
        Amount::new(10),
    ) else {
        panic!("seed deposit");
    };
    let balances_before = balances.clone();
    let Ok(state_before) = engine.pool(&pool).cloned() else {
        panic!("pool lookup");
    };

    // Underfunded swap, unmet slippage bound, and an overdrawn withdraw
    // must each roll back completely.
    assert_eq!(
        engine.swap(
            &pool,
            &mut balances,
            bob(),
            SwapDirection::XtoY,
            Amount::new(50),
            Amount::ZERO,
        ),
        Err(AmmError::InsufficientFunds)
    );
    assert_eq!(
        engine.swap(
            &pool,
            &mut balances,
            bob(),
            SwapDirection::XtoY,
            Amount::new(3),
            Amount::new(100),
        ),
        Err(AmmError::SlippageExceeded)
    );
    assert_eq!(
        engine.withdraw(&pool, &mut balances, bob(), LpTokens::new(1)),
        Err(AmmError::InsufficientLiquidity)
    );

    let Ok(state_after) = engine.pool(&pool) else {
        panic!("pool lookup");
    };
    assert_eq!(balances, balances_before);
    assert_eq!(*state_after, state_before);
}
