//! Swap preview.

use tracing::debug;

use crate::config::QuoteConfig;
use crate::cpmm::{
    compute_price_impact_with_fee, compute_swap_output, execution_rate, minimum_received,
};
use crate::domain::{Amount, Decimals, PriceImpactLevel, ReservePair};
use crate::error::Result;

/// Preview of selling `amount_in` into a pool.
///
/// # Examples
///
/// ```
/// use cpmm_engine::config::QuoteConfig;
/// use cpmm_engine::domain::{Amount, PriceImpactLevel, ReservePair};
/// use cpmm_engine::quote::SwapQuote;
///
/// let reserves = ReservePair::new(Amount::from_u128(1_000_000), Amount::from_u128(2_000_000));
/// let config = QuoteConfig::default();
/// let Ok(quote) = SwapQuote::new(Amount::from_u128(1_000), reserves, &config) else {
///     panic!("default config is valid");
/// };
/// assert_eq!(quote.amount_out(), Amount::from_u128(1_992));
/// assert_eq!(quote.fee_paid(), Amount::from_u128(3));
/// assert_eq!(quote.minimum_received(), Amount::from_u128(1_982));
/// assert_eq!(quote.impact_level(), PriceImpactLevel::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapQuote {
    amount_in: Amount,
    amount_out: Amount,
    fee_paid: Amount,
    minimum_received: Amount,
    price_impact: f64,
    impact_level: PriceImpactLevel,
}

impl SwapQuote {
    /// Quotes a swap against `reserves` under `config`.
    ///
    /// Degenerate inputs (zero amount, empty pool) quote zero output, fee,
    /// minimum received and price impact.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config` if it is invalid.
    pub fn new(amount_in: Amount, reserves: ReservePair, config: &QuoteConfig) -> Result<Self> {
        config.validate()?;

        let fee = config.fee();
        let amount_out = compute_swap_output(amount_in, reserves, fee);
        // No trade, no fee.
        let fee_paid = if amount_in.is_zero() || !reserves.has_liquidity() {
            Amount::ZERO
        } else {
            fee.fee_on(amount_in)?
        };
        let minimum_received = minimum_received(amount_out, config.slippage())?;
        let price_impact = compute_price_impact_with_fee(amount_in, reserves, fee);
        let impact_level = PriceImpactLevel::from_percent(price_impact);

        debug!(
            %amount_in,
            %amount_out,
            %minimum_received,
            price_impact,
            %impact_level,
            "swap quoted"
        );

        Ok(Self {
            amount_in,
            amount_out,
            fee_paid,
            minimum_received,
            price_impact,
            impact_level,
        })
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input kept by the pool as fee (rounded up).
    pub const fn fee_paid(&self) -> Amount {
        self.fee_paid
    }

    /// Returns the lowest output acceptable under the slippage tolerance.
    pub const fn minimum_received(&self) -> Amount {
        self.minimum_received
    }

    /// Returns the price impact in percent.
    pub const fn price_impact(&self) -> f64 {
        self.price_impact
    }

    /// Returns the severity bucket of [`price_impact`](Self::price_impact).
    pub const fn impact_level(&self) -> PriceImpactLevel {
        self.impact_level
    }

    /// Human-unit rate: output tokens per input token.
    #[must_use]
    pub fn execution_rate(&self, decimals_in: Decimals, decimals_out: Decimals) -> f64 {
        execution_rate(self.amount_in, decimals_in, self.amount_out, decimals_out)
    }
}
