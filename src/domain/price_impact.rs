//! Severity buckets for a price-impact percentage.

use core::fmt;

/// How strongly a trade moves the pool price, bucketed for display.
///
/// | Level | Impact |
/// |-------|--------|
/// | `Low` | below 1% |
/// | `Noticeable` | 1% to below 3% |
/// | `Moderate` | 3% to below 5% |
/// | `High` | 5% and above |
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::PriceImpactLevel;
///
/// assert_eq!(PriceImpactLevel::from_percent(0.2), PriceImpactLevel::Low);
/// assert_eq!(PriceImpactLevel::from_percent(7.5), PriceImpactLevel::High);
/// assert!(PriceImpactLevel::High.requires_warning());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceImpactLevel {
    /// Below 1%.
    Low,
    /// 1% to below 3%.
    Noticeable,
    /// 3% to below 5%.
    Moderate,
    /// 5% and above.
    High,
}

impl PriceImpactLevel {
    /// Buckets a percentage. `NaN` is treated as [`Low`](Self::Low).
    #[must_use]
    pub fn from_percent(impact: f64) -> Self {
        if impact >= 5.0 {
            Self::High
        } else if impact >= 3.0 {
            Self::Moderate
        } else if impact >= 1.0 {
            Self::Noticeable
        } else {
            Self::Low
        }
    }

    /// `true` from 3% up.
    #[must_use]
    pub const fn requires_warning(&self) -> bool {
        matches!(self, Self::Moderate | Self::High)
    }

    /// Advice shown next to a warning-level impact.
    #[must_use]
    pub const fn advice(&self) -> Option<&'static str> {
        match self {
            Self::High => Some(
                "High price impact! Consider splitting your trade into smaller amounts.",
            ),
            Self::Moderate => Some("Moderate price impact. Double-check your trade details."),
            Self::Low | Self::Noticeable => None,
        }
    }
}

impl fmt::Display for PriceImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Noticeable => "noticeable",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        f.write_str(label)
    }
}
