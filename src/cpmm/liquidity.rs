//! Liquidity-pool share accounting.
//!
//! Share percentages are display values (`f64`). Anything that becomes a
//! token amount (the paired deposit, withdrawal amounts) uses integer math
//! and rounds down in favour of the pool.

use crate::domain::{Amount, LiquiditySnapshot};
use crate::error::{AmmError, Result};
use crate::math::{u256_to_f64, u576_to_f64, widen, CheckedArithmetic, Rounding};

/// Pool share (percent) the caller would own after contributing
/// `contribution` to a pool with `total_supply` outstanding liquidity
/// tokens: `contribution / (total_supply + contribution) × 100`.
///
/// - A zero contribution owns `0.0`.
/// - The first depositor (`total_supply == 0`) owns `100.0`.
///
/// `reserve_in` does not enter the formula; it is part of the signature so
/// callers pass the same consistent pool read they use for the deposit.
///
/// # Examples
///
/// ```
/// use cpmm_engine::cpmm::compute_liquidity_share;
/// use cpmm_engine::domain::Amount;
///
/// let share = compute_liquidity_share(
///     Amount::from_u128(50),
///     Amount::from_u128(1_000),
///     Amount::from_u128(150),
/// );
/// assert!((share - 25.0).abs() < 1e-12);
/// assert_eq!(compute_liquidity_share(Amount::from_u128(1), Amount::ZERO, Amount::ZERO), 100.0);
/// ```
#[must_use]
pub fn compute_liquidity_share(
    contribution: Amount,
    _reserve_in: Amount,
    total_supply: Amount,
) -> f64 {
    if contribution.is_zero() {
        return 0.0;
    }
    if total_supply.is_zero() {
        return 100.0;
    }
    let supply_after = widen(total_supply.get()) + widen(contribution.get());
    u256_to_f64(contribution.get()) / u576_to_f64(supply_after) * 100.0
}

/// Share (percent) of the pool held by `caller_liquidity` out of
/// `total_supply`. Returns `0.0` when no liquidity token exists.
#[must_use]
pub fn compute_current_share(caller_liquidity: Amount, total_supply: Amount) -> f64 {
    if total_supply.is_zero() {
        return 0.0;
    }
    caller_liquidity.to_f64_lossy() / total_supply.to_f64_lossy() * 100.0
}

/// Amount of the other token needed to deposit `amount_a` at the current
/// pool ratio: `floor(amount_a × reserve_b / reserve_a)`.
///
/// Returns zero for a zero amount or an empty pool (the first depositor
/// sets the ratio freely).
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the paired amount exceeds 256 bits.
pub fn quote_paired_amount(
    amount_a: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<Amount> {
    if amount_a.is_zero() || reserve_a.is_zero() || reserve_b.is_zero() {
        return Ok(Amount::ZERO);
    }
    amount_a.safe_mul_div(&reserve_b, &reserve_a, Rounding::Down)
}

/// Token amounts returned for burning `liquidity` tokens:
/// `reserve_i × liquidity / total_supply`, rounded down.
///
/// Returns `(0, 0)` for zero liquidity.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientLiquidity`] if `liquidity` exceeds the
/// caller's balance or the pool's total supply.
pub fn preview_remove_liquidity(
    liquidity: Amount,
    snapshot: &LiquiditySnapshot,
) -> Result<(Amount, Amount)> {
    if liquidity > snapshot.caller_liquidity() {
        return Err(AmmError::InsufficientLiquidity(
            "withdrawal exceeds caller balance",
        ));
    }
    if liquidity > snapshot.total_supply() {
        return Err(AmmError::InsufficientLiquidity(
            "withdrawal exceeds total supply",
        ));
    }
    if liquidity.is_zero() {
        return Ok((Amount::ZERO, Amount::ZERO));
    }

    let total = snapshot.total_supply();
    let amount0 = snapshot
        .reserve0()
        .safe_mul_div(&liquidity, &total, Rounding::Down)?;
    let amount1 = snapshot
        .reserve1()
        .safe_mul_div(&liquidity, &total, Rounding::Down)?;
    Ok((amount0, amount1))
}
