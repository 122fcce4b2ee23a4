//! Ordered reserve pair seen from the input side of a swap.

use core::fmt;

use super::Amount;

/// The pool balances `(reserve_in, reserve_out)` for one swap direction.
///
/// A pair with either side at zero has no liquidity; every engine function
/// then returns its neutral result instead of an error.
///
/// The pair must come from a single consistent read of pool state.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{Amount, ReservePair};
///
/// let pair = ReservePair::new(Amount::from_u128(1_000), Amount::from_u128(2_000));
/// assert!(pair.has_liquidity());
/// assert_eq!(pair.reversed().reserve_in(), Amount::from_u128(2_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReservePair {
    reserve_in: Amount,
    reserve_out: Amount,
}

impl ReservePair {
    /// Creates a new reserve pair.
    pub const fn new(reserve_in: Amount, reserve_out: Amount) -> Self {
        Self {
            reserve_in,
            reserve_out,
        }
    }

    /// Balance of the token being sold into the pool.
    pub const fn reserve_in(&self) -> Amount {
        self.reserve_in
    }

    /// Balance of the token being bought from the pool.
    pub const fn reserve_out(&self) -> Amount {
        self.reserve_out
    }

    /// Returns `false` when either reserve is zero.
    #[must_use]
    pub fn has_liquidity(&self) -> bool {
        !self.reserve_in.is_zero() && !self.reserve_out.is_zero()
    }

    /// The same pool seen from the opposite swap direction.
    pub const fn reversed(&self) -> Self {
        Self {
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
        }
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReservePair(in={}, out={})", self.reserve_in, self.reserve_out)
    }
}
