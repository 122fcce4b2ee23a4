//! Value types used throughout the engine.
//!
//! All types are small `Copy` newtypes or structs with const accessors.
//! Nothing here performs I/O or holds mutable state.

mod amount;
mod basis_points;
mod decimals;
mod fee_rate;
mod liquidity_snapshot;
mod price_impact;
mod reserve_pair;
mod swap_direction;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use fee_rate::FeeRate;
pub use liquidity_snapshot::LiquiditySnapshot;
pub use price_impact::PriceImpactLevel;
pub use reserve_pair::ReservePair;
pub use swap_direction::SwapDirection;
