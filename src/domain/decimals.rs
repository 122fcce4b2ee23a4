//! Token decimal places.

use core::fmt;

/// Number of decimal places used to display a token amount.
///
/// Every `u8` is accepted. Decimals only drive human-readable conversion
/// (see [`to_base_units`](crate::math::to_base_units)); the swap math always
/// runs in base units.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Decimals;
///
/// let usdt = Decimals::new(6);
/// assert_eq!(usdt.get(), 6);
/// assert_eq!(Decimals::EIGHTEEN.get(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places (indivisible tokens).
    pub const ZERO: Self = Self(0);

    /// Six decimal places (USDC, USDT).
    pub const SIX: Self = Self(6);

    /// Eighteen decimal places (ETH and most ERC-20 tokens).
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a new `Decimals`.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as `f64`, for display conversions.
    #[must_use]
    pub fn scale_f64(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }
}

impl From<u8> for Decimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
