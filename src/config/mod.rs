//! Validated configuration structs.
//!
//! Fields are private; constructors run `validate()` so an instance that
//! exists is always usable.

mod quote_config;

pub use quote_config::{QuoteConfig, DEFAULT_SLIPPAGE};
