//! Add-liquidity preview.

use tracing::debug;

use crate::cpmm::{compute_current_share, compute_liquidity_share, quote_paired_amount};
use crate::domain::{Amount, LiquiditySnapshot};
use crate::error::Result;

/// Preview of depositing `amount0` of token 0 together with the matching
/// amount of token 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidityQuote {
    amount0: Amount,
    amount1: Amount,
    share_after_deposit: f64,
    current_share: f64,
}

impl LiquidityQuote {
    /// Quotes a deposit of `amount0` against `snapshot`.
    ///
    /// In an empty pool the first depositor picks the ratio, so `amount1` is
    /// zero and the share after deposit is 100%.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if
    /// the paired amount exceeds 256 bits.
    pub fn for_deposit(amount0: Amount, snapshot: &LiquiditySnapshot) -> Result<Self> {
        let amount1 = quote_paired_amount(amount0, snapshot.reserve0(), snapshot.reserve1())?;
        let share_after_deposit =
            compute_liquidity_share(amount0, snapshot.reserve0(), snapshot.total_supply());
        let current_share =
            compute_current_share(snapshot.caller_liquidity(), snapshot.total_supply());

        debug!(%amount0, %amount1, share_after_deposit, "deposit quoted");

        Ok(Self {
            amount0,
            amount1,
            share_after_deposit,
            current_share,
        })
    }

    /// Returns the token-0 amount.
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Returns the token-1 amount needed at the current pool ratio.
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Returns the pool share (percent) of this contribution.
    pub const fn share_after_deposit(&self) -> f64 {
        self.share_after_deposit
    }

    /// Returns the caller's pool share (percent) before the deposit.
    pub const fn current_share(&self) -> f64 {
        self.current_share
    }
}
