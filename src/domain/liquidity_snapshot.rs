//! Point-in-time view of a pool's liquidity-token accounting.

use super::{Amount, ReservePair, SwapDirection};

/// `(reserve0, reserve1, total_supply, caller_liquidity)` read together
/// from the pool-state source.
///
/// The engine only reads snapshots; applying results to storage is the
/// caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiquiditySnapshot {
    reserve0: Amount,
    reserve1: Amount,
    total_supply: Amount,
    caller_liquidity: Amount,
}

impl LiquiditySnapshot {
    /// Creates a new snapshot.
    pub const fn new(
        reserve0: Amount,
        reserve1: Amount,
        total_supply: Amount,
        caller_liquidity: Amount,
    ) -> Self {
        Self {
            reserve0,
            reserve1,
            total_supply,
            caller_liquidity,
        }
    }

    /// Pool balance of token 0.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Pool balance of token 1.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Total minted liquidity-token supply.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// The caller's own liquidity-token balance.
    pub const fn caller_liquidity(&self) -> Amount {
        self.caller_liquidity
    }

    /// The reserves ordered for a swap in `direction`.
    pub const fn reserve_pair(&self, direction: SwapDirection) -> ReservePair {
        match direction {
            SwapDirection::ZeroForOne => ReservePair::new(self.reserve0, self.reserve1),
            SwapDirection::OneForZero => ReservePair::new(self.reserve1, self.reserve0),
        }
    }
}
