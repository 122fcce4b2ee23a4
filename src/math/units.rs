//! Conversion between human-entered decimal strings and base units.
//!
//! Both directions work on digit strings rather than on `10^decimals`, so
//! any [`Decimals`] value (up to 255) is supported as long as the resulting
//! base-unit amount fits in 256 bits.
//!
//! # Examples
//!
//! ```
//! use cpmm_engine::domain::{Amount, Decimals};
//! use cpmm_engine::math::{from_base_units, to_base_units};
//!
//! let raw = to_base_units("123.456", Decimals::SIX).expect("valid amount");
//! assert_eq!(raw, Amount::from_u128(123_456_000));
//! assert_eq!(from_base_units(raw, Decimals::SIX), "123.456");
//! ```

use tracing::trace;

use crate::domain::{Amount, Decimals};
use crate::error::{AmmError, Result};

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a human decimal string and scales it to base units.
///
/// Fractional digits beyond `decimals` are truncated, never rounded up, so
/// the result is never more than the user typed. An empty integer or
/// fractional part is accepted (`".5"`, `"5."`).
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] for an empty string, a lone `"."`, a sign,
///   whitespace, or any character other than digits and one decimal point.
/// - [`AmmError::Overflow`] if the scaled amount exceeds 256 bits.
pub fn to_base_units(human: &str, decimals: Decimals) -> Result<Amount> {
    let (integer, fraction) = human.split_once('.').unwrap_or((human, ""));

    if integer.is_empty() && fraction.is_empty() {
        trace!(input = human, "rejected amount without digits");
        return Err(AmmError::InvalidAmount("amount has no digits"));
    }
    if !all_digits(integer) || !all_digits(fraction) {
        trace!(input = human, "rejected malformed amount");
        return Err(AmmError::InvalidAmount(
            "amount must be digits with at most one decimal point",
        ));
    }

    let places = usize::from(decimals.get());
    let kept = &fraction[..fraction.len().min(places)];

    let mut digits = String::with_capacity(integer.len() + places);
    digits.push_str(integer);
    digits.push_str(kept);
    digits.extend(core::iter::repeat('0').take(places - kept.len()));

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(Amount::ZERO);
    }
    significant.parse()
}

/// Formats a base-unit amount as a human decimal string.
///
/// Trailing fractional zeros are trimmed; the point is dropped when nothing
/// remains after it. At least one integer digit is always present.
#[must_use]
pub fn from_base_units(amount: Amount, decimals: Decimals) -> String {
    let digits = amount.to_string();
    let places = usize::from(decimals.get());
    if places == 0 {
        return digits;
    }

    let padded = if digits.len() <= places {
        let mut s = "0".repeat(places + 1 - digits.len());
        s.push_str(&digits);
        s
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - places);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Formats a display value with at most `places` fractional digits,
/// trimming trailing zeros and a dangling point.
///
/// ```
/// use cpmm_engine::math::format_display;
///
/// assert_eq!(format_display(2.0, 6), "2");
/// assert_eq!(format_display(0.5, 6), "0.5");
/// assert_eq!(format_display(100.0, 0), "100");
/// ```
#[must_use]
pub fn format_display(value: f64, places: usize) -> String {
    let fixed = format!("{value:.places$}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
