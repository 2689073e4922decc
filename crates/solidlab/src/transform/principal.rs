//! Principal values, principal directions and the plane of maximum shear.
//!
//! The principal angle from `atan(2·sxy/(nx-ny))/2` is only defined up to
//! 90°: it points at σ1 or at σ2 depending on the sign of `nx - ny`. The
//! root is picked by rotating to the candidate and comparing the rotated
//! normal with `value_1` after rounding both to integers. That coarse
//! comparison is part of the contract; at small radii (`value_1` and
//! `value_2` rounding to the same integer) it keeps the unrotated candidate.

use crate::cfg::FALLBACK_ANGLE;

use super::rotate::transform;
use super::types::{PlaneState, PrincipalResult, PrincipalStrain, StrainState};

/// Principal analysis of a plane tensor.
pub fn principal(state: PlaneState) -> PrincipalResult {
    let radius = state.radius();
    let center = state.center();
    let value_1 = center + radius;
    let value_2 = center - radius;

    let diff = state.normal_x - state.normal_y;
    // Exact zero checks: these are the singular points of the atan arguments.
    let raw = if diff != 0.0 {
        (2.0 * state.shear_xy / diff).atan() / 2.0
    } else {
        FALLBACK_ANGLE
    };
    let raw_shear = if state.shear_xy != 0.0 {
        (-diff / (2.0 * state.shear_xy)).atan() / 2.0
    } else {
        FALLBACK_ANGLE
    };

    let at_raw = transform(state, raw.to_degrees());
    let (angle_1, angle_2) = if matches_rounded(at_raw.normal_x_prime, value_1) {
        (raw, raw + std::f64::consts::FRAC_PI_2)
    } else {
        (raw + std::f64::consts::FRAC_PI_2, raw)
    };

    let shear_max = transform(state, raw_shear.to_degrees()).shear_xy_prime;

    PrincipalResult {
        value_1,
        value_2,
        angle_1_deg: angle_1.to_degrees(),
        angle_2_deg: angle_2.to_degrees(),
        shear_max,
        normal_at_shear_max: center,
        angle_shear_max_deg: raw_shear.to_degrees(),
    }
}

/// Principal strains from engineering shear input.
pub fn principal_strain(strain: StrainState) -> PrincipalStrain {
    PrincipalStrain {
        tensor: principal(strain.to_tensor()),
    }
}

/// Integer comparison with half-to-even rounding.
#[inline]
fn matches_rounded(a: f64, b: f64) -> bool {
    a.round_ties_even() == b.round_ties_even()
}
