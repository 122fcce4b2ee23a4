//! In-memory pool snapshot.
//!
//! [`StaticPool`] holds one fixed read of a two-token pool and implements
//! [`PoolState`] over it. It never changes: quoting a swap or a deposit does
//! not move its reserves.

use crate::config::QuoteConfig;
use crate::domain::{
    Amount, BasisPoints, Decimals, LiquiditySnapshot, ReservePair, SwapDirection,
};
use crate::error::AmmError;
use crate::quote::{LiquidityQuote, SwapQuote, WithdrawalQuote};
use crate::traits::PoolState;

/// A fixed two-token pool state.
///
/// # Validation
///
/// - `caller_liquidity <= total_supply`.
/// - A pool with liquidity tokens outstanding must hold both tokens.
///
/// # Example
///
/// ```rust
/// use cpmm_engine::config::QuoteConfig;
/// use cpmm_engine::domain::{Amount, SwapDirection};
/// use cpmm_engine::math::to_base_units;
/// use cpmm_engine::pools::StaticPool;
///
/// let pool = StaticPool::demo();
/// let Ok(amount_in) = to_base_units("1000", pool.decimals0()) else {
///     panic!("valid amount");
/// };
/// let config = QuoteConfig::default();
/// let Ok(quote) = pool.quote_swap(amount_in, SwapDirection::ZeroForOne, &config) else {
///     panic!("valid quote");
/// };
/// assert_eq!(quote.amount_out(), Amount::from_u128(1_992_013_962));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticPool {
    snapshot: LiquiditySnapshot,
    decimals0: Decimals,
    decimals1: Decimals,
}

impl StaticPool {
    /// Creates a new `StaticPool`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the snapshot is
    /// inconsistent (see the type-level docs).
    pub fn new(
        snapshot: LiquiditySnapshot,
        decimals0: Decimals,
        decimals1: Decimals,
    ) -> Result<Self, AmmError> {
        if snapshot.caller_liquidity() > snapshot.total_supply() {
            return Err(AmmError::InvalidConfiguration(
                "caller liquidity exceeds total supply",
            ));
        }
        let has_reserves = !snapshot.reserve0().is_zero() && !snapshot.reserve1().is_zero();
        if !snapshot.total_supply().is_zero() && !has_reserves {
            return Err(AmmError::InvalidConfiguration(
                "liquidity tokens outstanding against an empty reserve",
            ));
        }
        Ok(Self {
            snapshot,
            decimals0,
            decimals1,
        })
    }

    /// An ETH (18 decimals) / USDT (6 decimals) pool holding
    /// 1 000 000 ETH and 2 000 000 USDT, with 1 414 213 liquidity tokens
    /// of which the caller owns 10 000.
    pub const fn demo() -> Self {
        const E18: u128 = 1_000_000_000_000_000_000;
        const E6: u128 = 1_000_000;
        Self {
            snapshot: LiquiditySnapshot::new(
                Amount::from_u128(1_000_000 * E18),
                Amount::from_u128(2_000_000 * E6),
                Amount::from_u128(1_414_213 * E18),
                Amount::from_u128(10_000 * E18),
            ),
            decimals0: Decimals::EIGHTEEN,
            decimals1: Decimals::SIX,
        }
    }

    /// Returns the decimals of token 0.
    pub const fn decimals0(&self) -> Decimals {
        self.decimals0
    }

    /// Returns the decimals of token 1.
    pub const fn decimals1(&self) -> Decimals {
        self.decimals1
    }

    /// Returns `(decimals_in, decimals_out)` for a swap in `direction`.
    pub const fn decimals_for(&self, direction: SwapDirection) -> (Decimals, Decimals) {
        match direction {
            SwapDirection::ZeroForOne => (self.decimals0, self.decimals1),
            SwapDirection::OneForZero => (self.decimals1, self.decimals0),
        }
    }

    /// Quotes selling `amount_in` of the input token of `direction`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config` if it is invalid.
    pub fn quote_swap(
        &self,
        amount_in: Amount,
        direction: SwapDirection,
        config: &QuoteConfig,
    ) -> Result<SwapQuote, AmmError> {
        SwapQuote::new(amount_in, self.reserve_pair(direction)?, config)
    }

    /// Quotes depositing `amount0` of token 0 plus the matching token 1.
    ///
    /// # Errors
    ///
    /// See [`LiquidityQuote::for_deposit`].
    pub fn quote_deposit(&self, amount0: Amount) -> Result<LiquidityQuote, AmmError> {
        LiquidityQuote::for_deposit(amount0, &self.liquidity_snapshot()?)
    }

    /// Quotes burning `liquidity` of the caller's liquidity tokens.
    ///
    /// # Errors
    ///
    /// See [`WithdrawalQuote::new`].
    pub fn quote_withdrawal(&self, liquidity: Amount) -> Result<WithdrawalQuote, AmmError> {
        WithdrawalQuote::new(liquidity, &self.liquidity_snapshot()?)
    }

    /// Quotes burning `portion` of the caller's liquidity balance.
    ///
    /// # Errors
    ///
    /// See [`WithdrawalQuote::portion`].
    pub fn quote_withdrawal_portion(
        &self,
        portion: BasisPoints,
    ) -> Result<WithdrawalQuote, AmmError> {
        WithdrawalQuote::portion(portion, &self.liquidity_snapshot()?)
    }
}

impl PoolState for StaticPool {
    fn reserve_pair(&self, direction: SwapDirection) -> Result<ReservePair, AmmError> {
        Ok(self.snapshot.reserve_pair(direction))
    }

    fn liquidity_snapshot(&self) -> Result<LiquiditySnapshot, AmmError> {
        Ok(self.snapshot)
    }
}
