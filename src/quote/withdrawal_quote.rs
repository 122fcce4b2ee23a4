//! Remove-liquidity preview.

use tracing::debug;

use crate::cpmm::{compute_current_share, preview_remove_liquidity};
use crate::domain::{Amount, BasisPoints, LiquiditySnapshot};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, Rounding};

/// Preview of burning `liquidity` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalQuote {
    liquidity: Amount,
    amount0: Amount,
    amount1: Amount,
    remaining_share: f64,
}

impl WithdrawalQuote {
    /// Quotes burning `liquidity` tokens out of `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if `liquidity` exceeds
    /// the caller's balance or the total supply.
    pub fn new(liquidity: Amount, snapshot: &LiquiditySnapshot) -> Result<Self> {
        let (amount0, amount1) = preview_remove_liquidity(liquidity, snapshot)?;

        let caller_after = snapshot.caller_liquidity().safe_sub(&liquidity)?;
        let supply_after = snapshot.total_supply().safe_sub(&liquidity)?;
        let remaining_share = compute_current_share(caller_after, supply_after);

        debug!(%liquidity, %amount0, %amount1, remaining_share, "withdrawal quoted");

        Ok(Self {
            liquidity,
            amount0,
            amount1,
            remaining_share,
        })
    }

    /// Quotes burning `portion` of the caller's liquidity balance, rounded
    /// down (the 25 / 50 / 75 / 100 % quick picks).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `portion` exceeds 100%, or any
    /// error of [`WithdrawalQuote::new`].
    pub fn portion(portion: BasisPoints, snapshot: &LiquiditySnapshot) -> Result<Self> {
        if !portion.is_valid_percent() {
            return Err(AmmError::InvalidAmount("withdrawal portion above 100%"));
        }
        let liquidity = portion.apply(snapshot.caller_liquidity(), Rounding::Down)?;
        Self::new(liquidity, snapshot)
    }

    /// Returns the liquidity tokens burned.
    pub const fn liquidity(&self) -> Amount {
        self.liquidity
    }

    /// Returns the token-0 amount paid out.
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Returns the token-1 amount paid out.
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Returns the caller's pool share (percent) after the withdrawal.
    pub const fn remaining_share(&self) -> f64 {
        self.remaining_share
    }
}
