//! Proportional swap fee as a rational retention factor.

use core::fmt;

use super::{Amount, BasisPoints};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Rounding};

/// The fraction of the input amount that reaches the pricing curve.
///
/// A swap of `amount_in` prices `amount_in × numerator / denominator`; the
/// remainder is the fee and stays in the pool. `997/1000` is the Uniswap V2
/// 0.3% fee, `1000/1000` is fee-free.
///
/// # Invariants
///
/// - `denominator > 0`
/// - `numerator <= denominator`
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::FeeRate;
///
/// let fee = FeeRate::new(997, 1000).expect("valid fee");
/// assert_eq!(fee, FeeRate::UNISWAP_V2);
/// assert!((fee.fee_percent() - 0.3).abs() < 1e-12);
/// assert!(FeeRate::new(1001, 1000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeRate {
    numerator: u32,
    denominator: u32,
}

impl FeeRate {
    /// 0.3% fee (`997/1000`).
    pub const UNISWAP_V2: Self = Self {
        numerator: 997,
        denominator: 1000,
    };

    /// No fee (`1000/1000`).
    pub const ZERO: Self = Self {
        numerator: 1000,
        denominator: 1000,
    };

    /// Creates a validated fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `denominator` is zero or
    /// `numerator` exceeds `denominator`.
    pub const fn new(numerator: u32, denominator: u32) -> Result<Self, AmmError> {
        if denominator == 0 {
            return Err(AmmError::InvalidFee("fee denominator must be non-zero"));
        }
        if numerator > denominator {
            return Err(AmmError::InvalidFee(
                "fee numerator must not exceed denominator",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Builds the retention factor for a fee given in basis points
    /// (30 bp → `9970/10000`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee` exceeds 100%.
    pub const fn from_basis_points(fee: BasisPoints) -> Result<Self, AmmError> {
        if !fee.is_valid_percent() {
            return Err(AmmError::InvalidFee("fee must be at most 100%"));
        }
        let denominator = BasisPoints::MAX_PERCENT.get();
        Self::new(denominator - fee.get(), denominator)
    }

    /// Returns the retained-input numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero_fee(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Fee as a display percentage (`0.3` for `997/1000`).
    #[must_use]
    pub fn fee_percent(&self) -> f64 {
        f64::from(self.denominator - self.numerator) * 100.0 / f64::from(self.denominator)
    }

    /// Fee charged on `amount_in`, rounded up in favour of the pool.
    ///
    /// # Errors
    ///
    /// Cannot fail for a validated rate; the `Result` carries the checked
    /// arithmetic contract.
    pub fn fee_on(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        let taken = Amount::from(u64::from(self.denominator - self.numerator));
        let denominator = Amount::from(u64::from(self.denominator));
        amount_in.safe_mul_div(&taken, &denominator, Rounding::Up)
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{})",
            self.fee_percent(),
            self.numerator,
            self.denominator
        )
    }
}
