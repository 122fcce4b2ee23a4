//! Read access to a pool's reserves and liquidity-token accounting.
//!
//! The math engine is stateless; anything that can report a consistent
//! view of a pool (an in-memory snapshot, a cached chain read, a test
//! double) implements [`PoolState`] and hands the values to the quote
//! layer.

use crate::domain::{LiquiditySnapshot, ReservePair, SwapDirection};
use crate::error::AmmError;

/// Source of pool state for quoting.
///
/// Implementations must return values that belong to the same read: a
/// reserve pair and a snapshot taken at different times produce quotes
/// that match neither.
///
/// # Errors
///
/// Both methods return [`AmmError`] when the state cannot be produced.
/// In-memory implementations never fail.
pub trait PoolState {
    /// Returns the reserves ordered for a swap in `direction`.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn reserve_pair(&self, direction: SwapDirection) -> Result<ReservePair, AmmError>;

    /// Returns reserves, total supply and the caller's liquidity balance.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn liquidity_snapshot(&self) -> Result<LiquiditySnapshot, AmmError>;
}
