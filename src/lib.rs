//! # cpmm-engine
//!
//! Constant-product (`x · y = k`) AMM math: swap outputs with a
//! proportional fee, price impact, and liquidity-pool share accounting.
//!
//! Amounts are 256-bit base-unit integers. Anything that can settle a
//! balance (swap output, paired deposit, withdrawal amounts, minimum
//! received) is computed in integer arithmetic and rounded down; `f64` is
//! used only for display percentages and rates.
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_engine::prelude::*;
//!
//! // 1 000 000 ETH (18 dp) against 2 000 000 USDT (6 dp)
//! let pool = StaticPool::demo();
//!
//! // Sell 1000 ETH with the 0.3% fee and 0.5% slippage tolerance
//! let Ok(amount_in) = to_base_units("1000", Decimals::EIGHTEEN) else {
//!     panic!("valid amount");
//! };
//! let Ok(quote) = pool.quote_swap(amount_in, SwapDirection::ZeroForOne, &QuoteConfig::default())
//! else {
//!     panic!("valid config");
//! };
//!
//! assert_eq!(from_base_units(quote.amount_out(), Decimals::SIX), "1992.013962");
//! assert_eq!(quote.impact_level(), PriceImpactLevel::Low);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  QuoteConfig + a PoolState implementation
//! └──────┬──────┘
//!        │ reserve_pair / liquidity_snapshot
//!        ▼
//! ┌─────────────┐
//! │   Quotes     │  SwapQuote, LiquidityQuote, WithdrawalQuote
//! └──────┬──────┘
//!        │ pure functions
//!        ▼
//! ┌─────────────┐
//! │    cpmm      │  compute_swap_output, compute_price_impact, shares
//! └──────┬──────┘
//!        │ CheckedArithmetic, U576 intermediates
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Amount, FeeRate, ReservePair, LiquiditySnapshot, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cpmm`] | Stateless AMM math: [`compute_swap_output`](cpmm::compute_swap_output), [`compute_price_impact`](cpmm::compute_price_impact), share functions |
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`FeeRate`](domain::FeeRate), [`ReservePair`](domain::ReservePair), etc. |
//! | [`quote`] | Form previews: [`SwapQuote`](quote::SwapQuote), [`LiquidityQuote`](quote::LiquidityQuote), [`WithdrawalQuote`](quote::WithdrawalQuote) |
//! | [`traits`] | [`PoolState`](traits::PoolState), the pool-read seam |
//! | [`pools`]  | [`StaticPool`](pools::StaticPool), an in-memory pool snapshot |
//! | [`config`] | [`QuoteConfig`](config::QuoteConfig): fee rate and slippage tolerance |
//! | [`math`]   | Wide integers, checked arithmetic, rounding, base-unit strings |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod cpmm;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod quote;
pub mod traits;
