//! Error types for material validation and criterion dispatch.
//!
//! The arithmetic itself never fails: zero denominators surface as
//! `SafetyFactor::Undefined`. Errors only come from validating inputs.

use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A strength value is non-positive or not finite.
    #[error("invalid material limit: {name} = {value} (must be positive and finite)")]
    InvalidMaterialLimit { name: &'static str, value: f64 },

    /// The limit kind does not carry what the criterion needs.
    #[error("criterion {criterion} cannot use a {limit} limit")]
    LimitMismatch {
        criterion: &'static str,
        limit: &'static str,
    },

    /// Criterion name not in {tresca, von-mises, rankine, mohr}.
    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    /// A stress or strain component is NaN or infinite.
    #[error("non-finite input: {name}")]
    NonFiniteInput { name: &'static str },
}

/// Reject NaN/inf inputs before they reach a verdict.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteInput { name })
    }
}

/// Strengths must be strictly positive.
pub(crate) fn ensure_strength(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidMaterialLimit { name, value })
    }
}
