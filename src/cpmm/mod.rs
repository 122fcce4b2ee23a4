//! Constant-product (`x · y = k`) AMM math.
//!
//! Every function here is pure: the caller passes one consistent read of
//! pool state and gets back an amount or a display percentage. Degenerate
//! inputs (zero amounts, empty reserves) produce neutral results rather
//! than errors.
//!
//! | Function | Result | Arithmetic |
//! |----------|--------|------------|
//! | [`compute_swap_output`] | output amount | integer, floor |
//! | [`minimum_received`] | slippage bound | integer |
//! | [`quote_paired_amount`] | deposit amount | integer, floor |
//! | [`preview_remove_liquidity`] | withdrawal amounts | integer, floor |
//! | [`compute_price_impact`] | percent | `f64` |
//! | [`compute_spot_price`] | ratio | `f64` |
//! | [`compute_liquidity_share`] | percent | `f64` |
//! | [`compute_current_share`] | percent | `f64` |
//! | [`execution_rate`] | ratio | `f64` |

mod liquidity;
mod price;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::{
    compute_current_share, compute_liquidity_share, preview_remove_liquidity, quote_paired_amount,
};
pub use price::{
    compute_price_impact, compute_price_impact_with_fee, compute_spot_price, execution_rate,
};
pub use swap::{compute_swap_output, minimum_received};
