//! Raw token amount in base units with checked arithmetic.

use core::fmt;
use core::str::FromStr;

use uint::FromDecStrErr;

use crate::error::AmmError;
use crate::math::{div_round, narrow, u256_to_f64, widen, Rounding, U256};

/// A token quantity in the token's smallest indivisible unit (wei or
/// equivalent).
///
/// `Amount` never interprets decimals; that is the job of
/// [`Decimals`](super::Decimals) and the base-unit helpers in
/// [`math`](crate::math). Every 256-bit value is a valid amount.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Amount;
/// use cpmm_engine::math::Rounding;
///
/// let a = Amount::from_u128(100);
/// let b = Amount::from_u128(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_u128(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::from_u128(100)));
/// assert_eq!(b.checked_div(&Amount::from_u128(3), Rounding::Up), Some(Amount::from_u128(67)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Maximum representable amount (`2^256 − 1`).
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a raw 256-bit value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Creates a new `Amount` from a `u128`.
    pub const fn from_u128(value: u128) -> Self {
        Self(U256([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        div_round(widen(self.0), widen(divisor.0), rounding)
            .and_then(narrow)
            .map(Self)
    }

    /// Computes `self × numerator / denominator` without intermediate
    /// overflow.
    ///
    /// Returns `None` if `denominator` is zero or the quotient needs more
    /// than 256 bits.
    #[must_use]
    pub fn mul_div(&self, numerator: &Self, denominator: &Self, rounding: Rounding) -> Option<Self> {
        let product = widen(self.0).checked_mul(widen(numerator.0))?;
        div_round(product, widen(denominator.0), rounding)
            .and_then(narrow)
            .map(Self)
    }

    /// Converts to `f64` for display; precision beyond 53 bits is lost.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        u256_to_f64(self.0)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a plain decimal integer in base units (no decimal point).
impl FromStr for Amount {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmmError::InvalidAmount("empty base-unit string"));
        }
        U256::from_dec_str(s).map(Self).map_err(|err| match err {
            FromDecStrErr::InvalidCharacter => {
                AmmError::InvalidAmount("base-unit string must contain only digits")
            }
            FromDecStrErr::InvalidLength => AmmError::Overflow("amount exceeds 256 bits"),
        })
    }
}
