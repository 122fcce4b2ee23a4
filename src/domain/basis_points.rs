//! Basis-point representation for percentages.

use core::fmt;

use super::Amount;
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Rounding};

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for slippage tolerances and for withdrawing a fraction of a
/// liquidity balance. All `u32` values are representable; use
/// [`is_valid_percent`](Self::is_valid_percent) to check the `0..=100%`
/// range.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::BasisPoints;
///
/// let half_percent = BasisPoints::new(50);
/// assert!(half_percent.is_valid_percent());
/// assert!((half_percent.as_percent() - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `100% − self`, or `None` above 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Converts to a floating-point percentage (30 bp → 0.30).
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Computes `amount × self / 10 000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds 256 bits, which
    /// is only possible above 100%.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        amount
            .mul_div(
                &Amount::from(u64::from(self.0)),
                &Amount::from(u64::from(MAX_BPS)),
                rounding,
            )
            .ok_or(AmmError::Overflow("basis points apply overflow"))
    }

    /// Computes `amount − amount × self / 10 000`, rounding the deducted
    /// part up so the remainder is conservative.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidSlippage`] if `self` exceeds 100%.
    pub fn deduct_from(&self, amount: Amount) -> crate::error::Result<Amount> {
        if !self.is_valid_percent() {
            return Err(AmmError::InvalidSlippage("tolerance must be at most 100%"));
        }
        let deducted = self.apply(amount, Rounding::Up)?;
        amount.safe_sub(&deducted)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
