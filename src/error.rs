//! Typed failures raised by the pricing core.
//!
//! Degenerate inputs (zero time to maturity, zero volatility) are not errors; they are
//! priced through the limiting payoffs in [`crate::models::bs`].

use thiserror::Error;

/// Convenience alias for results produced by the pricing core.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors produced by the pricer and the sensitivity grid builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A scalar input is outside the domain of the Black-Scholes formula.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The spot/volatility range of a heatmap cannot be sampled.
    #[error("invalid range: {reason}")]
    InvalidRange { reason: String },
}

impl PricingError {
    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }
}
