//! Integration tests exercising the public API end to end.
//!
//! These tests go through the same path a front end would: parse a human
//! amount, read a pool through [`PoolState`], build a quote, and format the
//! result back for display.

#![allow(clippy::panic)]

use cpmm_engine::config::QuoteConfig;
use cpmm_engine::cpmm::{
    compute_current_share, compute_liquidity_share, compute_price_impact, compute_spot_price,
    compute_swap_output, preview_remove_liquidity, quote_paired_amount,
};
use cpmm_engine::domain::{
    Amount, BasisPoints, Decimals, FeeRate, LiquiditySnapshot, PriceImpactLevel, ReservePair,
    SwapDirection,
};
use cpmm_engine::error::AmmError;
use cpmm_engine::math::{format_display, from_base_units, to_base_units, U256};
use cpmm_engine::pools::StaticPool;
use cpmm_engine::quote::SwapQuote;
use cpmm_engine::traits::PoolState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn amt(v: u128) -> Amount {
    Amount::from_u128(v)
}

fn scaled(units: u64, decimals: usize) -> Amount {
    Amount::new(U256::from(units) * U256::exp10(decimals))
}

fn parse(human: &str, decimals: Decimals) -> Amount {
    let Ok(a) = to_base_units(human, decimals) else {
        panic!("valid amount {human:?}");
    };
    a
}

fn demo_pair(direction: SwapDirection) -> ReservePair {
    let Ok(pair) = StaticPool::demo().reserve_pair(direction) else {
        panic!("in-memory read");
    };
    pair
}

/// A pool source whose reads always fail.
struct UnreachablePool;

impl PoolState for UnreachablePool {
    fn reserve_pair(&self, _direction: SwapDirection) -> Result<ReservePair, AmmError> {
        Err(AmmError::InsufficientLiquidity("pool unavailable"))
    }

    fn liquidity_snapshot(&self) -> Result<LiquiditySnapshot, AmmError> {
        Err(AmmError::InsufficientLiquidity("pool unavailable"))
    }
}

// ---------------------------------------------------------------------------
// Swap output
// ---------------------------------------------------------------------------

#[test]
fn zero_amount_identity() {
    for (r_in, r_out) in [(0u128, 0u128), (1, 1), (1_000, 2_000), (u128::MAX, 7)] {
        let reserves = ReservePair::new(amt(r_in), amt(r_out));
        assert_eq!(
            compute_swap_output(Amount::ZERO, reserves, FeeRate::UNISWAP_V2),
            Amount::ZERO
        );
    }
}

#[test]
fn zero_reserve_identity() {
    for a in [0u128, 1, 1_000, u128::MAX] {
        let empty_in = ReservePair::new(Amount::ZERO, amt(5));
        let empty_out = ReservePair::new(amt(5), Amount::ZERO);
        assert_eq!(compute_swap_output(amt(a), empty_in, FeeRate::UNISWAP_V2), Amount::ZERO);
        assert_eq!(compute_swap_output(amt(a), empty_out, FeeRate::UNISWAP_V2), Amount::ZERO);
    }
}

#[test]
fn output_stays_below_reserve() {
    let reserves = demo_pair(SwapDirection::ZeroForOne);
    for units in [1u64, 1_000, 1_000_000, 1_000_000_000, u64::MAX] {
        let out = compute_swap_output(scaled(units, 18), reserves, FeeRate::UNISWAP_V2);
        assert!(out < reserves.reserve_out(), "units={units} out={out}");
    }
}

#[test]
fn output_is_monotone_in_input() {
    let reserves = demo_pair(SwapDirection::ZeroForOne);
    let mut previous = Amount::ZERO;
    for units in [0u64, 1, 2, 10, 500, 1_000, 250_000, 10_000_000] {
        let out = compute_swap_output(scaled(units, 18), reserves, FeeRate::UNISWAP_V2);
        assert!(out >= previous);
        previous = out;
    }
}

#[test]
fn no_fee_yields_at_least_as_much() {
    let reserves = demo_pair(SwapDirection::OneForZero);
    for units in [1u64, 100, 2_000, 1_000_000] {
        let a = scaled(units, 6);
        assert!(
            compute_swap_output(a, reserves, FeeRate::ZERO)
                >= compute_swap_output(a, reserves, FeeRate::UNISWAP_V2)
        );
    }
}

#[test]
fn eth_usdt_regression_fixture() {
    let out = compute_swap_output(
        scaled(1_000, 18),
        ReservePair::new(scaled(1_000_000, 18), scaled(2_000_000, 6)),
        FeeRate::UNISWAP_V2,
    );
    assert_eq!(out, amt(1_992_013_962));
    assert_eq!(from_base_units(out, Decimals::SIX), "1992.013962");
}

// ---------------------------------------------------------------------------
// Display percentages
// ---------------------------------------------------------------------------

#[test]
fn price_impact_is_monotone() {
    let reserves = demo_pair(SwapDirection::ZeroForOne);
    let mut previous = 0.0;
    for units in [1u64, 10, 1_000, 10_000, 100_000, 1_000_000, 100_000_000] {
        let impact = compute_price_impact(scaled(units, 18), reserves);
        assert!(impact >= previous, "units={units} impact={impact}");
        previous = impact;
    }
}

#[test]
fn spot_price_of_demo_pool() {
    // 2e12 / 1e24 base units; 2 USDT per ETH once decimals are applied.
    let spot = compute_spot_price(demo_pair(SwapDirection::ZeroForOne));
    let human = spot * Decimals::EIGHTEEN.scale_f64() / Decimals::SIX.scale_f64();
    assert!((human - 2.0).abs() < 1e-9);
    assert_eq!(format_display(human, 6), "2");
}

#[test]
fn first_depositor_share() {
    for x in [1u128, 42, u128::MAX] {
        assert_eq!(compute_liquidity_share(amt(x), amt(0), Amount::ZERO), 100.0);
    }
}

#[test]
fn current_share_of_demo_position() {
    let share = compute_current_share(scaled(10_000, 18), scaled(1_414_213, 18));
    assert!((share - 0.7072).abs() < 1e-4, "share={share}");
    assert_eq!(format_display(share, 4), "0.7071");
}

// ---------------------------------------------------------------------------
// Base-unit conversion
// ---------------------------------------------------------------------------

#[test]
fn base_unit_round_trip() {
    let cases: [(&str, u8); 9] = [
        ("0", 0),
        ("1", 0),
        ("0", 6),
        ("1", 6),
        ("0.000001", 6),
        ("123.456", 6),
        ("0", 18),
        ("0.000001", 18),
        ("123.456", 18),
    ];
    for (human, d) in cases {
        let decimals = Decimals::new(d);
        assert_eq!(from_base_units(parse(human, decimals), decimals), human);
    }
}

#[test]
fn base_units_truncate_excess_precision() {
    assert_eq!(from_base_units(parse("123.456", Decimals::ZERO), Decimals::ZERO), "123");
    assert_eq!(from_base_units(parse("0.000001", Decimals::ZERO), Decimals::ZERO), "0");
    assert_eq!(parse("1.9999999", Decimals::SIX), amt(1_999_999));
}

#[test]
fn malformed_amounts_rejected() {
    for bad in ["", ".", "-1", "+1", "1.2.3", " 1", "1e6", "abc"] {
        let Err(AmmError::InvalidAmount(_)) = to_base_units(bad, Decimals::SIX) else {
            panic!("{bad:?} should be rejected");
        };
    }
    let huge = "9".repeat(80);
    assert!(matches!(
        to_base_units(&huge, Decimals::ZERO),
        Err(AmmError::Overflow(_))
    ));
}

// ---------------------------------------------------------------------------
// Full flows
// ---------------------------------------------------------------------------

#[test]
fn swap_form_flow() {
    let pool = StaticPool::demo();
    let direction = SwapDirection::ZeroForOne;
    let (d_in, d_out) = pool.decimals_for(direction);

    let Ok(quote) = pool.quote_swap(parse("1000", d_in), direction, &QuoteConfig::default())
    else {
        panic!("valid quote");
    };

    assert_eq!(from_base_units(quote.amount_out(), d_out), "1992.013962");
    assert_eq!(from_base_units(quote.fee_paid(), d_in), "3");
    assert_eq!(from_base_units(quote.minimum_received(), d_out), "1982.053892");
    assert_eq!(format_display(quote.execution_rate(d_in, d_out), 6), "1.992014");
    assert_eq!(quote.impact_level(), PriceImpactLevel::Low);
    assert!(quote.impact_level().advice().is_none());
}

#[test]
fn large_swap_warns() {
    let pool = StaticPool::demo();
    let Ok(quote) = pool.quote_swap(
        parse("60000", Decimals::EIGHTEEN),
        SwapDirection::ZeroForOne,
        &QuoteConfig::default(),
    ) else {
        panic!("valid quote");
    };
    assert_eq!(quote.impact_level(), PriceImpactLevel::High);
    assert!(quote.impact_level().advice().is_some());
}

#[test]
fn custom_fee_and_slippage() {
    let Ok(fee) = FeeRate::from_basis_points(BasisPoints::new(100)) else {
        panic!("valid fee");
    };
    let Ok(config) = QuoteConfig::new(fee, BasisPoints::new(300)) else {
        panic!("valid config");
    };
    let reserves = ReservePair::new(amt(1_000_000), amt(2_000_000));

    let Ok(empty) = StaticPool::demo().quote_swap(amt(0), SwapDirection::ZeroForOne, &config)
    else {
        panic!("valid quote");
    };
    assert_eq!(empty.amount_out(), Amount::ZERO);

    let Ok(quote) = SwapQuote::new(amt(1_000), reserves, &config) else {
        panic!("valid quote");
    };
    // 1000·9900·2e6 / (1e6·10000 + 1000·9900) = 1978.0…
    assert_eq!(quote.amount_out(), amt(1_978));
    assert_eq!(quote.fee_paid(), amt(10));
    // 1978 − ceil(1978·0.03) = 1978 − 60
    assert_eq!(quote.minimum_received(), amt(1_918));
}

#[test]
fn liquidity_form_flow() {
    let pool = StaticPool::demo();
    let Ok(snapshot) = pool.liquidity_snapshot() else {
        panic!("in-memory read");
    };

    let Ok(deposit) = pool.quote_deposit(parse("10", pool.decimals0())) else {
        panic!("valid deposit");
    };
    assert_eq!(from_base_units(deposit.amount1(), pool.decimals1()), "20");
    assert_eq!(
        quote_paired_amount(deposit.amount0(), snapshot.reserve0(), snapshot.reserve1()),
        Ok(deposit.amount1())
    );
    assert!(deposit.share_after_deposit() > 0.0 && deposit.share_after_deposit() < 0.001);

    let Ok(quarter) = pool.quote_withdrawal_portion(BasisPoints::new(2_500)) else {
        panic!("valid withdrawal");
    };
    assert_eq!(quarter.liquidity(), scaled(2_500, 18));
    assert_eq!(
        preview_remove_liquidity(quarter.liquidity(), &snapshot),
        Ok((quarter.amount0(), quarter.amount1()))
    );
    assert!(quarter.remaining_share() < deposit.current_share());
}

#[test]
fn withdrawing_too_much_fails() {
    let pool = StaticPool::demo();
    let Err(AmmError::InsufficientLiquidity(_)) = pool.quote_withdrawal(scaled(10_001, 18)) else {
        panic!("expected InsufficientLiquidity");
    };
}

fn quote_through<P: PoolState>(pool: &P, amount_in: Amount) -> Result<SwapQuote, AmmError> {
    let reserves = pool.reserve_pair(SwapDirection::ZeroForOne)?;
    SwapQuote::new(amount_in, reserves, &QuoteConfig::default())
}

#[test]
fn quotes_work_through_any_pool_source() {
    let Ok(quote) = quote_through(&StaticPool::demo(), scaled(1_000, 18)) else {
        panic!("in-memory read");
    };
    assert_eq!(quote.amount_out(), amt(1_992_013_962));

    assert_eq!(
        quote_through(&UnreachablePool, scaled(1_000, 18)),
        Err(AmmError::InsufficientLiquidity("pool unavailable"))
    );
    assert!(UnreachablePool.liquidity_snapshot().is_err());
}
