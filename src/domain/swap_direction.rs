//! Which pool token is sold in a swap.

use core::fmt;

/// Direction of a swap within a two-token pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token 0, buy token 1.
    ZeroForOne,
    /// Sell token 1, buy token 0.
    OneForZero,
}

impl SwapDirection {
    /// The opposite direction (the "flip tokens" button of a swap form).
    #[must_use]
    pub const fn flipped(&self) -> Self {
        match self {
            Self::ZeroForOne => Self::OneForZero,
            Self::OneForZero => Self::ZeroForOne,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => f.write_str("token0 -> token1"),
            Self::OneForZero => f.write_str("token1 -> token0"),
        }
    }
}
