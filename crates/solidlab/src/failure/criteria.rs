//! The four criteria as plain arithmetic on principal stresses.
//!
//! Tresca, von Mises and Rankine compare an equivalent stress with a limit
//! and report `limit / governing`. Mohr compares the circle radius with the
//! envelope radius at the same center and reports `r / r_max`, the inverse
//! sense of the other three.

use super::envelope::MohrEnvelope;
use super::types::{FailureVerdict, SafetyFactor};

/// Maximum shear stress (Tresca) yield check.
pub fn tresca(sigma_1: f64, sigma_2: f64, sigma_yield: f64) -> FailureVerdict {
    let governing = if sign(sigma_1) == sign(sigma_2) {
        sigma_1.abs().max(sigma_2.abs())
    } else {
        sigma_1.abs() + sigma_2.abs()
    };
    limit_verdict(governing, sigma_yield)
}

/// Distortion energy (von Mises) yield check.
pub fn von_mises(sigma_1: f64, sigma_2: f64, sigma_yield: f64) -> FailureVerdict {
    let governing = (sigma_1 * sigma_1 - sigma_1 * sigma_2 + sigma_2 * sigma_2).sqrt();
    limit_verdict(governing, sigma_yield)
}

/// Maximum normal stress (Rankine) fracture check.
pub fn rankine(sigma_1: f64, sigma_2: f64, sigma_u: f64) -> FailureVerdict {
    let governing = sigma_1.abs().max(sigma_2.abs());
    limit_verdict(governing, sigma_u)
}

/// Mohr envelope fracture check; compression strength comes first.
pub fn mohr(sigma_1: f64, sigma_2: f64, sigma_uc: f64, sigma_ut: f64) -> FailureVerdict {
    let envelope = MohrEnvelope::new(sigma_uc, sigma_ut);
    let center = (sigma_1 + sigma_2) / 2.0;
    let r = (sigma_1 - sigma_2).abs() / 2.0;
    let r_max = envelope.radius_limit(center);
    FailureVerdict {
        failed: r >= r_max,
        safety_factor: SafetyFactor::ratio(r, r_max),
        governing: r,
    }
}

#[inline]
fn limit_verdict(governing: f64, limit: f64) -> FailureVerdict {
    FailureVerdict {
        failed: governing >= limit,
        safety_factor: SafetyFactor::ratio(limit, governing),
        governing,
    }
}

/// Three-valued sign; zero is its own sign (unlike `f64::signum`).
#[inline]
fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}
