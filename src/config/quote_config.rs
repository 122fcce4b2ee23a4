//! Parameters shared by every quote: the pool fee and the caller's
//! slippage tolerance.

use tracing::debug;

use crate::domain::{BasisPoints, FeeRate};
use crate::error::AmmError;

/// Default slippage tolerance: 0.5%.
pub const DEFAULT_SLIPPAGE: BasisPoints = BasisPoints::new(50);

/// Configuration for building [`SwapQuote`](crate::quote::SwapQuote)s.
///
/// # Validation
///
/// - The slippage tolerance must not exceed 100% (10 000 bp).
/// - The fee must leave some input after the fee (`numerator > 0`); a rate
///   that keeps the whole input can never produce an output.
///
/// [`FeeRate`] already guarantees `numerator <= denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteConfig {
    fee: FeeRate,
    slippage: BasisPoints,
}

impl QuoteConfig {
    /// Creates a new `QuoteConfig`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidSlippage`] if `slippage` exceeds 100%.
    /// - [`AmmError::InvalidConfiguration`] if `fee` keeps the whole input.
    pub fn new(fee: FeeRate, slippage: BasisPoints) -> Result<Self, AmmError> {
        let config = Self { fee, slippage };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`QuoteConfig::new`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.slippage.is_valid_percent() {
            debug!(slippage = %self.slippage, "rejecting quote config");
            return Err(AmmError::InvalidSlippage("tolerance above 100%"));
        }
        if self.fee.numerator() == 0 {
            debug!(fee = %self.fee, "rejecting quote config");
            return Err(AmmError::InvalidConfiguration(
                "fee rate leaves no input to swap",
            ));
        }
        Ok(())
    }

    /// Returns a copy with a different slippage tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidSlippage`] if `slippage` exceeds 100%.
    pub fn with_slippage(self, slippage: BasisPoints) -> Result<Self, AmmError> {
        Self::new(self.fee, slippage)
    }

    /// Returns a copy with a different fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `fee` keeps the whole input.
    pub fn with_fee(self, fee: FeeRate) -> Result<Self, AmmError> {
        Self::new(fee, self.slippage)
    }

    /// Returns the fee rate.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Returns the slippage tolerance.
    #[must_use]
    pub const fn slippage(&self) -> BasisPoints {
        self.slippage
    }
}

impl Default for QuoteConfig {
    /// 997/1000 fee with 0.5% slippage.
    fn default() -> Self {
        Self {
            fee: FeeRate::UNISWAP_V2,
            slippage: DEFAULT_SLIPPAGE,
        }
    }
}
