//! Flat function surface for presentation layers (CLI, Python bindings).
//!
//! Every entry point takes raw numbers and returns plain records, matching
//! how a page or notebook calls the core: one call per redraw.

use crate::failure::{self, FailureVerdict, MohrEnvelope};
use crate::transform::{self, PlaneState, PrincipalResult, RotatedState};

/// Stress (or tensor strain) components at angle `theta_deg`.
#[inline]
pub fn transform(normal_x: f64, normal_y: f64, shear_xy: f64, theta_deg: f64) -> RotatedState {
    transform::transform(PlaneState::new(normal_x, normal_y, shear_xy), theta_deg)
}

/// Principal values, principal angles and the signed maximum shear.
#[inline]
pub fn principal(normal_x: f64, normal_y: f64, shear_xy: f64) -> PrincipalResult {
    transform::principal(PlaneState::new(normal_x, normal_y, shear_xy))
}

#[inline]
pub fn tresca(sigma_1: f64, sigma_2: f64, sigma_yield: f64) -> FailureVerdict {
    failure::tresca(sigma_1, sigma_2, sigma_yield)
}

#[inline]
pub fn von_mises(sigma_1: f64, sigma_2: f64, sigma_yield: f64) -> FailureVerdict {
    failure::von_mises(sigma_1, sigma_2, sigma_yield)
}

#[inline]
pub fn rankine(sigma_1: f64, sigma_2: f64, sigma_u: f64) -> FailureVerdict {
    failure::rankine(sigma_1, sigma_2, sigma_u)
}

/// Note the argument order: compression strength first.
#[inline]
pub fn mohr(sigma_1: f64, sigma_2: f64, sigma_uc: f64, sigma_ut: f64) -> FailureVerdict {
    failure::mohr(sigma_1, sigma_2, sigma_uc, sigma_ut)
}

#[inline]
pub fn mohr_envelope_geometry(sigma_uc: f64, sigma_ut: f64) -> MohrEnvelope {
    failure::mohr_envelope_geometry(sigma_uc, sigma_ut)
}
