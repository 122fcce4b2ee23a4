//! Trait seams between the math engine and its collaborators.
//!
//! [`PoolState`] supplies the pool reads every quote starts from.

mod pool_state;

pub use pool_state::PoolState;
