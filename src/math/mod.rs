//! Arithmetic support for the engine.
//!
//! - [`U256`] / [`U576`]: fixed-width integers for amounts and intermediates.
//! - [`Rounding`] and [`div_round`]: division with an explicit direction.
//! - [`CheckedArithmetic`]: `Result`-returning arithmetic on [`Amount`](crate::domain::Amount).
//! - [`to_base_units`] / [`from_base_units`]: human decimal strings.

mod checked;
mod rounding;
mod units;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, Rounding};
pub use units::{format_display, from_base_units, to_base_units};
pub use wide::{narrow, u256_to_f64, u576_to_f64, widen, U256, U576};
