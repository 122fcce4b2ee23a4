//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_engine::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BasisPoints, Decimals, FeeRate, LiquiditySnapshot, PriceImpactLevel, ReservePair,
    SwapDirection,
};

pub use crate::cpmm::{
    compute_current_share, compute_liquidity_share, compute_price_impact, compute_swap_output,
};

pub use crate::math::{from_base_units, to_base_units, CheckedArithmetic, Rounding};

pub use crate::config::QuoteConfig;

pub use crate::quote::{LiquidityQuote, SwapQuote, WithdrawalQuote};

pub use crate::traits::PoolState;

pub use crate::pools::StaticPool;

pub use crate::error::{AmmError, Result};
