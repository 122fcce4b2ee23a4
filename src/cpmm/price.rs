//! Display-only price figures: spot price, price impact, execution rate.
//!
//! These functions return `f64` and never drive a settlement amount. The
//! integer output they depend on comes from
//! [`compute_swap_output`](super::compute_swap_output).

use crate::domain::{Amount, Decimals, FeeRate, ReservePair};
use crate::math::{u256_to_f64, u576_to_f64, widen};

use super::compute_swap_output;

/// Marginal price `reserve_out / reserve_in` in base units.
///
/// The orientation follows the swap direction of `reserves`: the result is
/// output tokens per input token. Pass [`ReservePair::reversed`] for the
/// inverse quote.
///
/// Returns `0.0` when `reserve_in` is zero.
#[must_use]
pub fn compute_spot_price(reserves: ReservePair) -> f64 {
    if reserves.reserve_in().is_zero() {
        return 0.0;
    }
    reserves.reserve_out().to_f64_lossy() / reserves.reserve_in().to_f64_lossy()
}

/// Price impact of selling `amount_in`, in percent, using the 0.3% fee.
///
/// See [`compute_price_impact_with_fee`].
///
/// # Examples
///
/// ```
/// use cpmm_engine::cpmm::compute_price_impact;
/// use cpmm_engine::domain::{Amount, ReservePair};
///
/// let reserves = ReservePair::new(Amount::from_u128(1_000_000), Amount::from_u128(2_000_000));
/// let small = compute_price_impact(Amount::from_u128(1_000), reserves);
/// let large = compute_price_impact(Amount::from_u128(100_000), reserves);
/// assert!(small < large);
/// assert_eq!(compute_price_impact(Amount::ZERO, reserves), 0.0);
/// ```
#[must_use]
pub fn compute_price_impact(amount_in: Amount, reserves: ReservePair) -> f64 {
    compute_price_impact_with_fee(amount_in, reserves, FeeRate::UNISWAP_V2)
}

/// Price impact of selling `amount_in` with an explicit fee, in percent.
///
/// With `p0 = reserve_out / reserve_in` and
/// `p1 = (reserve_out − amount_out) / (reserve_in + amount_in)`, the result
/// is `|p1 − p0| / p0 × 100`. Returns `0.0` for a zero input or an empty
/// pool. Non-decreasing in `amount_in` for fixed reserves.
#[must_use]
pub fn compute_price_impact_with_fee(
    amount_in: Amount,
    reserves: ReservePair,
    fee: FeeRate,
) -> f64 {
    if amount_in.is_zero() || !reserves.has_liquidity() {
        return 0.0;
    }

    let amount_out = compute_swap_output(amount_in, reserves, fee);
    let reserve_in = reserves.reserve_in().get();
    let reserve_out = reserves.reserve_out().get();

    let price_before = u256_to_f64(reserve_out) / u256_to_f64(reserve_in);
    let reserve_in_after = widen(reserve_in) + widen(amount_in.get());
    let reserve_out_after = reserve_out.saturating_sub(amount_out.get());
    let price_after = u256_to_f64(reserve_out_after) / u576_to_f64(reserve_in_after);

    ((price_after - price_before) / price_before).abs() * 100.0
}

/// Human-unit exchange rate of a trade: how many output tokens one input
/// token buys.
///
/// Returns `0.0` when `amount_in` is zero.
#[must_use]
pub fn execution_rate(
    amount_in: Amount,
    decimals_in: Decimals,
    amount_out: Amount,
    decimals_out: Decimals,
) -> f64 {
    if amount_in.is_zero() {
        return 0.0;
    }
    let human_in = amount_in.to_f64_lossy() / decimals_in.scale_f64();
    let human_out = amount_out.to_f64_lossy() / decimals_out.scale_f64();
    human_out / human_in
}
