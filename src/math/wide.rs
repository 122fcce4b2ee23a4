//! Fixed-width unsigned integers used by the engine.
//!
//! [`U256`] matches the width of on-chain token arithmetic and backs
//! [`Amount`](crate::domain::Amount). [`U576`] holds swap intermediates:
//! `amount × fee_numerator × reserve` is below `2^256 · 2^32 · 2^256`, so no
//! product of valid inputs can overflow it.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

construct_uint! {
    /// 576-bit unsigned integer for intermediate products.
    pub struct U576(9);
}

/// Zero-extends a [`U256`] to [`U576`].
#[must_use]
pub fn widen(value: U256) -> U576 {
    let mut words = [0u64; 9];
    words[..4].copy_from_slice(&value.0);
    U576(words)
}

/// Narrows a [`U576`] back to [`U256`], or `None` when it needs more than
/// 256 bits.
#[must_use]
pub fn narrow(value: U576) -> Option<U256> {
    if value.0[4..].iter().any(|word| *word != 0) {
        return None;
    }
    let mut words = [0u64; 4];
    words.copy_from_slice(&value.0[..4]);
    Some(U256(words))
}

/// Converts little-endian 64-bit limbs to the nearest `f64`.
///
/// The top 64 significant bits are converted in one rounding step, with the
/// lower bits folded into a sticky bit, then scaled by an exact power of
/// two. The result is correctly rounded, so the conversion is monotone.
fn limbs_to_f64(limbs: &[u64]) -> f64 {
    let Some(top) = limbs.iter().rposition(|word| *word != 0) else {
        return 0.0;
    };
    if top == 0 {
        return limbs[0] as f64;
    }

    let high = limbs[top];
    let low = limbs[top - 1];
    let lz = high.leading_zeros();
    let (mantissa, dropped) = if lz == 0 {
        (high, low)
    } else {
        ((high << lz) | (low >> (64 - lz)), low << lz)
    };
    let sticky = dropped != 0 || limbs[..top - 1].iter().any(|word| *word != 0);

    // value ≈ mantissa × 2^(bit_length − 64), with bit_length − 64 = 64·top − lz
    let exponent = 64 * top as i32 - lz as i32;
    (mantissa | u64::from(sticky)) as f64 * 2f64.powi(exponent)
}

/// Lossy conversion of a [`U256`] to `f64`.
#[must_use]
pub fn u256_to_f64(value: U256) -> f64 {
    limbs_to_f64(&value.0)
}

/// Lossy conversion of a [`U576`] to `f64`.
#[must_use]
pub fn u576_to_f64(value: U576) -> f64 {
    limbs_to_f64(&value.0)
}
