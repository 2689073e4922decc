//! Rotation of a plane tensor to arbitrary axes.

use super::types::{PlaneState, RotatedState, RotatedStrain, StrainState};

/// Rotate `state` by `theta_deg` (counterclockwise, degrees).
///
/// ```text
/// nx' = c + d·cos 2θ + sxy·sin 2θ
/// ny' = c - d·cos 2θ - sxy·sin 2θ
/// sxy' = -d·sin 2θ + sxy·cos 2θ        c = (nx+ny)/2, d = (nx-ny)/2
/// ```
pub fn transform(state: PlaneState, theta_deg: f64) -> RotatedState {
    let two_theta = 2.0 * theta_deg.to_radians();
    let (sin2, cos2) = two_theta.sin_cos();
    let c = state.center();
    let d = state.half_difference();
    RotatedState {
        normal_x_prime: c + d * cos2 + state.shear_xy * sin2,
        normal_y_prime: c - d * cos2 - state.shear_xy * sin2,
        shear_xy_prime: -d * sin2 + state.shear_xy * cos2,
    }
}

/// Rotate a strain state; shear goes in and comes out as engineering γ.
pub fn transform_strain(strain: StrainState, theta_deg: f64) -> RotatedStrain {
    let r = transform(strain.to_tensor(), theta_deg);
    RotatedStrain {
        normal_x_prime: r.normal_x_prime,
        normal_y_prime: r.normal_y_prime,
        shear_engineering_prime: 2.0 * r.shear_xy_prime,
    }
}
