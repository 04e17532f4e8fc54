//! Tunables for turning real line coefficients into small integers.

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// Rational approximation settings used when simplifying tangent lines.
///
/// Each coefficient is matched against `n / d` for `d = 1, 2, …, max_denominator`;
/// the first `d` whose fraction lies within `tolerance` wins. The search is a
/// bounded loop, so a coefficient with no close fraction simply fails to simplify.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct FractionConfig {
    /// Maximum absolute error accepted for `n / d`
    pub tolerance: f64,
    /// Largest denominator tried
    pub max_denominator: u32,
}

impl Default for FractionConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl FractionConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;
    pub const DEFAULT_MAX_DENOMINATOR: u32 = 10_000;

    pub fn new(tolerance: Option<f64>, max_denominator: Option<u32>) -> Self {
        Self {
            tolerance: tolerance.unwrap_or(Self::DEFAULT_TOLERANCE),
            max_denominator: max_denominator.unwrap_or(Self::DEFAULT_MAX_DENOMINATOR).max(1),
        }
    }
}
