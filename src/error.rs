//! Unified error type for the AMM math engine.
//!
//! The core swap and share functions never fail: degenerate inputs yield a
//! neutral `0` result. `AmmError` covers the surrounding helpers (base-unit
//! parsing, validated configuration, withdrawal previews) so callers get one
//! consistent error type across the crate.

use thiserror::Error;

/// Errors produced by fallible operations of this crate.
///
/// Variants carry a `&'static str` context so that the type stays `Copy`
/// and comparable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// An arithmetic result exceeds the 256-bit amount range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would produce a negative amount.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The fee rate violates `0 < denominator` and `numerator <= denominator`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// The slippage tolerance is above 100%.
    #[error("invalid slippage tolerance: {0}")]
    InvalidSlippage(&'static str),

    /// A human-entered amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The requested liquidity exceeds what the pool or the caller holds.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// A configuration value is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
