//! Failure Evaluator: yield and fracture criteria for plane stress.
//!
//! Purpose
//! - Pass/fail and safety factor for Tresca, von Mises (ductile), Rankine
//!   and Mohr (brittle), from the two in-plane principal stresses.
//! - One dispatch point, `evaluate`, over the closed `Criterion` set; each
//!   criterion stays a free function so it can be tested alone.
//! - Envelope and locus geometry so diagrams draw the same boundaries the
//!   verdicts use.
//!
//! Contract
//! - The free functions are arithmetic only: no validation, no panics.
//!   A zero denominator yields `SafetyFactor::Undefined` while `failed`
//!   keeps the plain `>=` comparison.
//! - Validation happens when building a `MaterialLimit`.

mod criteria;
mod envelope;
mod types;

pub use criteria::{mohr, rankine, tresca, von_mises};
pub use envelope::{
    locus, mohr_envelope_geometry, rankine_locus, tresca_locus, von_mises_locus, MohrEnvelope,
};
pub use types::{
    Criterion, FailureVerdict, MaterialClass, MaterialLimit, PrincipalStresses, SafetyFactor,
};

use crate::error::{Error, Result};

/// Evaluate `criterion` for `stresses` against `limit`.
///
/// Errors with `LimitMismatch` when the limit kind does not fit the
/// criterion (e.g. a yield point for Mohr).
pub fn evaluate(
    criterion: Criterion,
    stresses: PrincipalStresses,
    limit: &MaterialLimit,
) -> Result<FailureVerdict> {
    let PrincipalStresses { sigma_1, sigma_2 } = stresses;
    match (criterion, *limit) {
        (Criterion::Tresca, MaterialLimit::Yield { yield_strength }) => {
            Ok(tresca(sigma_1, sigma_2, yield_strength))
        }
        (Criterion::VonMises, MaterialLimit::Yield { yield_strength }) => {
            Ok(von_mises(sigma_1, sigma_2, yield_strength))
        }
        (Criterion::Rankine, MaterialLimit::Ultimate { ultimate_strength }) => {
            Ok(rankine(sigma_1, sigma_2, ultimate_strength))
        }
        (
            Criterion::Mohr,
            MaterialLimit::Brittle {
                ultimate_tension,
                ultimate_compression,
            },
        ) => Ok(mohr(sigma_1, sigma_2, ultimate_compression, ultimate_tension)),
        (criterion, limit) => Err(Error::LimitMismatch {
            criterion: criterion.name(),
            limit: limit.kind(),
        }),
    }
}

/// Evaluate every criterion that accepts `limit`.
pub fn evaluate_all(
    stresses: PrincipalStresses,
    limit: &MaterialLimit,
) -> Vec<(Criterion, FailureVerdict)> {
    Criterion::ALL
        .iter()
        .filter_map(|&c| evaluate(c, stresses, limit).ok().map(|v| (c, v)))
        .collect()
}

#[cfg(test)]
mod tests;
