//! Quotes: everything a swap or liquidity form shows for one input.
//!
//! A quote is computed from one pool read and never touches pool state.
//! Integer fields are exact base-unit amounts; `f64` fields are display
//! percentages.

mod liquidity_quote;
mod swap_quote;
mod withdrawal_quote;

pub use liquidity_quote::LiquidityQuote;
pub use swap_quote::SwapQuote;
pub use withdrawal_quote::WithdrawalQuote;
