//! Pool-state implementations.
//!
//! | Pool | Backing |
//! |------|---------|
//! | [`StaticPool`] | fixed in-memory snapshot |

mod static_pool;

pub use static_pool::StaticPool;
