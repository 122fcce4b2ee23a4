//! Property-based tests using `proptest` for the constant-product math.
//!
//! 1. **Zero identity**: zero input or an empty side gives zero output.
//! 2. **Pool never drains**: `amount_out < reserve_out`.
//! 3. **Output monotonicity**: more input never buys less output.
//! 4. **Invariant preservation**: `k` does not decrease across a swap.
//! 5. **Fee effect**: a fee never increases the output.
//! 6. **Impact monotonicity**: larger trades move the price at least as much.
//! 7. **Share bounds**: first depositor owns 100%, others strictly less.
//! 8. **Base-unit round trip**: `to_base_units(from_base_units(n)) == n`.
//! 9. **Paired quote proportionality**: deposits keep the pool ratio.
//! 10. **Lossy conversion order**: `x <= y` implies `f64(x) <= f64(y)`.

use proptest::prelude::*;

use crate::cpmm::{
    compute_liquidity_share, compute_price_impact, compute_swap_output, quote_paired_amount,
};
use crate::domain::{Amount, Decimals, FeeRate, ReservePair};
use crate::math::{from_base_units, to_base_units, u256_to_f64, widen, U256};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Any 256-bit amount.
fn wide_amount_strategy() -> impl Strategy<Value = Amount> {
    any::<[u64; 4]>().prop_map(|limbs| Amount::new(U256(limbs)))
}

/// Reserve values in `[1, 10^30]`, spanning 6- and 18-decimal pools.
fn reserve_strategy() -> impl Strategy<Value = Amount> {
    (1u128..=1_000_000_000_000_000_000_000_000_000_000u128).prop_map(Amount::from_u128)
}

fn fee_strategy() -> impl Strategy<Value = FeeRate> {
    (1u32..=10_000u32, 0u32..=10_000u32).prop_filter_map("numerator above denominator", |(d, n)| {
        FeeRate::new(n, d).ok()
    })
}

// ---------------------------------------------------------------------------
// Swap output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_zero_identity(
        amount in wide_amount_strategy(),
        reserve in wide_amount_strategy(),
        fee in fee_strategy(),
    ) {
        prop_assert_eq!(
            compute_swap_output(Amount::ZERO, ReservePair::new(reserve, reserve), fee),
            Amount::ZERO
        );
        prop_assert_eq!(
            compute_swap_output(amount, ReservePair::new(Amount::ZERO, reserve), fee),
            Amount::ZERO
        );
        prop_assert_eq!(
            compute_swap_output(amount, ReservePair::new(reserve, Amount::ZERO), fee),
            Amount::ZERO
        );
    }

    #[test]
    fn prop_pool_never_drains(
        amount in wide_amount_strategy(),
        r_in in wide_amount_strategy(),
        r_out in wide_amount_strategy(),
        fee in fee_strategy(),
    ) {
        let reserves = ReservePair::new(r_in, r_out);
        prop_assume!(reserves.has_liquidity());
        let out = compute_swap_output(amount, reserves, fee);
        prop_assert!(out < r_out, "out={} reserve_out={}", out, r_out);
    }

    #[test]
    fn prop_output_monotone_in_input(
        a in 0u128..=u128::MAX / 2,
        extra in 0u128..=u128::MAX / 2,
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
    ) {
        let reserves = ReservePair::new(r_in, r_out);
        let small = compute_swap_output(Amount::from_u128(a), reserves, FeeRate::UNISWAP_V2);
        let large = compute_swap_output(Amount::from_u128(a + extra), reserves, FeeRate::UNISWAP_V2);
        prop_assert!(small <= large, "small={} large={}", small, large);
    }

    #[test]
    fn prop_invariant_non_decreasing(
        amount in wide_amount_strategy(),
        r_in in wide_amount_strategy(),
        r_out in wide_amount_strategy(),
        fee in fee_strategy(),
    ) {
        let reserves = ReservePair::new(r_in, r_out);
        prop_assume!(reserves.has_liquidity());
        let out = compute_swap_output(amount, reserves, fee);

        let k_before = widen(r_in.get()) * widen(r_out.get());
        let k_after = (widen(r_in.get()) + widen(amount.get()))
            * (widen(r_out.get()) - widen(out.get()));
        prop_assert!(k_after >= k_before);
    }

    #[test]
    fn prop_fee_never_increases_output(
        amount in wide_amount_strategy(),
        r_in in wide_amount_strategy(),
        r_out in wide_amount_strategy(),
        fee in fee_strategy(),
    ) {
        let reserves = ReservePair::new(r_in, r_out);
        let with_fee = compute_swap_output(amount, reserves, fee);
        let no_fee = compute_swap_output(amount, reserves, FeeRate::ZERO);
        prop_assert!(with_fee <= no_fee);
    }
}

// ---------------------------------------------------------------------------
// Display percentages
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_price_impact_monotone(
        a in 1u128..=1_000_000_000_000_000_000_000_000u128,
        extra in 0u128..=1_000_000_000_000_000_000_000_000u128,
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
    ) {
        let reserves = ReservePair::new(r_in, r_out);
        let small = compute_price_impact(Amount::from_u128(a), reserves);
        let large = compute_price_impact(Amount::from_u128(a + extra), reserves);
        prop_assert!(small <= large, "small={} large={}", small, large);
        prop_assert!((0.0..=100.0).contains(&large));
    }

    #[test]
    fn prop_first_depositor_owns_everything(
        contribution in wide_amount_strategy(),
        reserve in wide_amount_strategy(),
    ) {
        prop_assume!(!contribution.is_zero());
        prop_assert_eq!(compute_liquidity_share(contribution, reserve, Amount::ZERO), 100.0);
    }

    #[test]
    fn prop_share_bounded(
        contribution in reserve_strategy(),
        supply in reserve_strategy(),
    ) {
        let share = compute_liquidity_share(contribution, Amount::ZERO, supply);
        prop_assert!(share > 0.0 && share <= 100.0, "share={}", share);
    }
}

// ---------------------------------------------------------------------------
// Integer helpers
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_base_units_round_trip(
        amount in wide_amount_strategy(),
        decimals in 0u8..=90u8,
    ) {
        let decimals = Decimals::new(decimals);
        let human = from_base_units(amount, decimals);
        prop_assert_eq!(to_base_units(&human, decimals), Ok(amount));
    }

    #[test]
    fn prop_paired_amount_keeps_ratio(
        amount in 1u128..=1_000_000_000_000_000_000_000u128,
        r_a in reserve_strategy(),
        r_b in reserve_strategy(),
    ) {
        let Ok(paired) = quote_paired_amount(Amount::from_u128(amount), r_a, r_b) else {
            return Err(TestCaseError::fail("u128 operands cannot overflow"));
        };
        // paired / amount <= r_b / r_a < (paired + 1) / amount
        let lhs = widen(paired.get()) * widen(r_a.get());
        let rhs = widen(U256::from(amount)) * widen(r_b.get());
        let next = (widen(paired.get()) + widen(U256::one())) * widen(r_a.get());
        prop_assert!(lhs <= rhs);
        prop_assert!(rhs < next);
    }
}

// ---------------------------------------------------------------------------
// Display conversion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_lossy_conversion_preserves_order(
        a in wide_amount_strategy(),
        b in wide_amount_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(u256_to_f64(lo.get()) <= u256_to_f64(hi.get()));
    }

    #[test]
    fn prop_neighbours_convert_in_order(a in wide_amount_strategy()) {
        prop_assume!(a < Amount::MAX);
        let next = a.get() + U256::one();
        prop_assert!(u256_to_f64(a.get()) <= u256_to_f64(next));
    }
}
