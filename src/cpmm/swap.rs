//! Constant-product swap output (`x · y = k` with the fee taken from input).
//!
//! # Algorithm
//!
//! 1. `input_after_fee = amount_in × fee_numerator`
//! 2. `amount_out = input_after_fee × reserve_out / (reserve_in × fee_denominator + input_after_fee)`
//!
//! Division truncates, matching on-chain integer semantics. All products are
//! formed in 576 bits: `amount_in × fee_numerator × reserve_out` stays below
//! `2^544`, so no 256-bit input can overflow. No floating point is used.
//!
//! # Guarantee
//!
//! With non-zero reserves, `amount_out < reserve_out`: the denominator
//! exceeds `input_after_fee` by at least `reserve_in × fee_denominator`, so a
//! single finite swap can never drain the pool.

use tracing::trace;

use crate::domain::{Amount, BasisPoints, FeeRate, ReservePair};
use crate::error::Result;
use crate::math::{div_round, narrow, widen, Rounding, U576};

/// Output amount for selling `amount_in` into a pool with `reserves`.
///
/// Returns [`Amount::ZERO`] when `amount_in` is zero or either reserve is
/// zero. Never fails.
///
/// # Examples
///
/// ```
/// use cpmm_engine::cpmm::compute_swap_output;
/// use cpmm_engine::domain::{Amount, FeeRate, ReservePair};
///
/// let reserves = ReservePair::new(Amount::from_u128(1_000_000), Amount::from_u128(2_000_000));
/// let out = compute_swap_output(Amount::from_u128(1_000), reserves, FeeRate::UNISWAP_V2);
/// assert_eq!(out, Amount::from_u128(1_992));
/// ```
pub fn compute_swap_output(amount_in: Amount, reserves: ReservePair, fee: FeeRate) -> Amount {
    if amount_in.is_zero() || !reserves.has_liquidity() {
        trace!(%amount_in, %reserves, "degenerate swap input, output is zero");
        return Amount::ZERO;
    }

    let input_after_fee = widen(amount_in.get()) * U576::from(fee.numerator());
    let numerator = input_after_fee * widen(reserves.reserve_out().get());
    let denominator =
        widen(reserves.reserve_in().get()) * U576::from(fee.denominator()) + input_after_fee;

    // The quotient is below reserve_out, so it always narrows back to 256 bits.
    div_round(numerator, denominator, Rounding::Down)
        .and_then(narrow)
        .map_or(Amount::ZERO, Amount::new)
}

/// Lowest acceptable output for `amount_out` under a slippage tolerance.
///
/// The deducted part is rounded up, so the bound never exceeds
/// `amount_out × (1 − slippage)`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidSlippage`](crate::error::AmmError::InvalidSlippage)
/// if `slippage` exceeds 100%.
pub fn minimum_received(amount_out: Amount, slippage: BasisPoints) -> Result<Amount> {
    slippage.deduct_from(amount_out)
}
