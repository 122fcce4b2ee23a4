//! Explicit rounding direction for integer division.
//!
//! # Convention
//!
//! **Always round against the user** (pool-favorable):
//!
//! | Quantity | Direction | Rationale |
//! |----------|-----------|-----------|
//! | Swap output | [`Rounding::Down`] | User receives less |
//! | Withdrawal amounts | [`Rounding::Down`] | User receives less |
//! | Fee paid | [`Rounding::Up`] | Pool takes more |
//! | Slippage deduction | [`Rounding::Up`] | Minimum received is conservative |
//!
//! # Examples
//!
//! ```
//! use cpmm_engine::math::{div_round, Rounding, U576};
//!
//! let ten = U576::from(10u64);
//! let three = U576::from(3u64);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U576::from(3u64)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U576::from(4u64)));
//! assert_eq!(div_round(ten, U576::zero(), Rounding::Down), None);
//! ```

use super::wide::U576;

/// Rounding direction for a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

/// Integer division of [`U576`] values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero. Ceiling division cannot
/// overflow because the quotient of a non-zero remainder is strictly below
/// `U576::MAX`.
#[must_use]
pub fn div_round(numerator: U576, denominator: U576, rounding: Rounding) -> Option<U576> {
    if denominator.is_zero() {
        return None;
    }
    let (quotient, remainder) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up if remainder.is_zero() => Some(quotient),
        Rounding::Up => quotient.checked_add(U576::one()),
    }
}
