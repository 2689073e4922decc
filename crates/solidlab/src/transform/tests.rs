use super::*;
use crate::cfg::TRACE_EPS;
use approx::assert_relative_eq;
use nalgebra::{Rotation2, SymmetricEigen};
use proptest::prelude::*;

fn assert_principal(
    p: &PrincipalResult,
    value_1: f64,
    value_2: f64,
    angle_1: f64,
    angle_2: f64,
) {
    assert_relative_eq!(p.value_1, value_1, epsilon = 1e-9);
    assert_relative_eq!(p.value_2, value_2, epsilon = 1e-9);
    assert_relative_eq!(p.angle_1_deg, angle_1, epsilon = 1e-9);
    assert_relative_eq!(p.angle_2_deg, angle_2, epsilon = 1e-9);
}

#[test]
fn identity_rotation_keeps_components() {
    let s = PlaneState::new(12.0, -4.0, 3.0);
    let r = transform(s, 0.0);
    assert_relative_eq!(r.normal_x_prime, 12.0, epsilon = 1e-12);
    assert_relative_eq!(r.normal_y_prime, -4.0, epsilon = 1e-12);
    assert_relative_eq!(r.shear_xy_prime, 3.0, epsilon = 1e-12);
}

#[test]
fn quarter_turn_swaps_normals_and_flips_shear() {
    let s = PlaneState::new(12.0, -4.0, 3.0);
    let r = transform(s, 90.0);
    assert_relative_eq!(r.normal_x_prime, -4.0, epsilon = 1e-12);
    assert_relative_eq!(r.normal_y_prime, 12.0, epsilon = 1e-12);
    assert_relative_eq!(r.shear_xy_prime, -3.0, epsilon = 1e-12);
}

#[test]
fn pure_shear_at_45_degrees() {
    // τ = 10 rotates into σ1 = 10, σ2 = -10 with no shear.
    let r = transform(PlaneState::new(0.0, 0.0, 10.0), 45.0);
    assert_relative_eq!(r.normal_x_prime, 10.0, epsilon = 1e-12);
    assert_relative_eq!(r.normal_y_prime, -10.0, epsilon = 1e-12);
    assert!(r.shear_xy_prime.abs() < 1e-12);
}

#[test]
fn matches_matrix_rotation() {
    let s = PlaneState::new(80.0, -20.0, 35.0);
    for theta in [-170.0, -33.0, 0.0, 12.5, 60.0, 135.0] {
        let rot = Rotation2::new(f64::to_radians(theta));
        let m = rot.matrix().transpose() * s.to_matrix() * rot.matrix();
        let expected = PlaneState::from_matrix(&m);
        let r = transform(s, theta);
        assert_relative_eq!(r.normal_x_prime, expected.normal_x, epsilon = 1e-9);
        assert_relative_eq!(r.normal_y_prime, expected.normal_y, epsilon = 1e-9);
        assert_relative_eq!(r.shear_xy_prime, expected.shear_xy, epsilon = 1e-9);
    }
}

#[test]
fn uniaxial_x() {
    let p = principal(PlaneState::new(100.0, 0.0, 0.0));
    assert_principal(&p, 100.0, 0.0, 0.0, 90.0);
    // sxy == 0 takes the 45° branch; the rotated shear there is -(nx-ny)/2.
    assert_relative_eq!(p.angle_shear_max_deg, 45.0, epsilon = 1e-12);
    assert_relative_eq!(p.shear_max, -50.0, epsilon = 1e-9);
    assert_relative_eq!(p.normal_at_shear_max, 50.0, epsilon = 1e-12);
}

#[test]
fn uniaxial_y_swaps_candidate() {
    // atan gives 0°, which points at σ2 here; the tie-break moves σ1 to 90°.
    let p = principal(PlaneState::new(0.0, 100.0, 0.0));
    assert_principal(&p, 100.0, 0.0, 90.0, 0.0);
}

#[test]
fn dashboard_default_state() {
    // σx = 10, σy = 0, τxy = 5: c = 5, R = √50.
    let p = principal(PlaneState::new(10.0, 0.0, 5.0));
    let r = 50.0_f64.sqrt();
    assert_principal(&p, 5.0 + r, 5.0 - r, 22.5, 112.5);
    assert_relative_eq!(p.angle_shear_max_deg, -22.5, epsilon = 1e-9);
    assert_relative_eq!(p.shear_max, r, epsilon = 1e-9);
    assert_relative_eq!(p.normal_at_shear_max, 5.0, epsilon = 1e-12);
}

#[test]
fn equal_normals_use_fallback_angle() {
    let p = principal(PlaneState::new(0.0, 0.0, 10.0));
    assert_principal(&p, 10.0, -10.0, 45.0, 135.0);
    let n = principal(PlaneState::new(0.0, 0.0, -10.0));
    assert_principal(&n, 10.0, -10.0, 135.0, 45.0);
    // sxy != 0 and nx == ny: max-shear angle is atan(0)/2 = 0.
    assert_relative_eq!(n.angle_shear_max_deg, 0.0, epsilon = 1e-12);
    assert_relative_eq!(n.shear_max, -10.0, epsilon = 1e-12);
}

#[test]
fn isotropic_state_has_zero_radius() {
    let p = principal(PlaneState::new(50.0, 50.0, 0.0));
    assert_relative_eq!(p.value_1, 50.0);
    assert_relative_eq!(p.value_2, 50.0);
    assert_relative_eq!(p.shear_max, 0.0, epsilon = 1e-12);
    // Angles are a convention here; only orthogonality is meaningful.
    assert_relative_eq!((p.angle_2_deg - p.angle_1_deg).abs(), 90.0, epsilon = 1e-9);
}

#[test]
fn small_radius_keeps_candidate() {
    // nx < ny puts the candidate on σ2, but value_1 = 0.3 and value_2 = 0.1
    // round to the same integer, so no swap happens.
    let p = principal(PlaneState::new(0.1, 0.3, 0.0));
    assert_relative_eq!(p.value_1, 0.3, epsilon = 1e-12);
    assert_relative_eq!(p.angle_1_deg, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.angle_2_deg, 90.0, epsilon = 1e-12);
}

#[test]
fn principal_values_match_eigenvalues() {
    let s = PlaneState::new(-30.0, 70.0, -45.0);
    let p = principal(s);
    let eig = SymmetricEigen::new(s.to_matrix());
    let hi = eig.eigenvalues.max();
    let lo = eig.eigenvalues.min();
    assert_relative_eq!(p.value_1, hi, epsilon = 1e-9);
    assert_relative_eq!(p.value_2, lo, epsilon = 1e-9);
}

#[test]
fn strain_uses_half_engineering_shear() {
    let strain = StrainState::new(100.0, 0.0, 50.0);
    assert_eq!(strain.to_tensor(), PlaneState::new(100.0, 0.0, 25.0));

    let p = principal_strain(strain);
    let r = (50.0_f64.powi(2) + 25.0_f64.powi(2)).sqrt();
    assert_relative_eq!(p.value_1(), 50.0 + r, epsilon = 1e-9);
    assert_relative_eq!(p.value_2(), 50.0 - r, epsilon = 1e-9);
    assert_relative_eq!(p.max_engineering_shear().abs(), 2.0 * r, epsilon = 1e-9);
    assert_relative_eq!(p.normal_at_shear_max(), 50.0, epsilon = 1e-12);

    let rs = transform_strain(strain, 90.0);
    assert_relative_eq!(rs.normal_x_prime, 0.0, epsilon = 1e-9);
    assert_relative_eq!(rs.normal_y_prime, 100.0, epsilon = 1e-9);
    assert_relative_eq!(rs.shear_engineering_prime, -50.0, epsilon = 1e-9);
}

fn component() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn scale(s: &PlaneState) -> f64 {
    1.0 + s.normal_x.abs() + s.normal_y.abs() + s.shear_xy.abs()
}

proptest! {
    #[test]
    fn trace_is_invariant(nx in component(), ny in component(), sxy in component(), theta in -720.0..720.0f64) {
        let s = PlaneState::new(nx, ny, sxy);
        let r = transform(s, theta);
        prop_assert!((r.trace() - s.trace()).abs() <= TRACE_EPS);
    }

    #[test]
    fn full_turn_is_identity(nx in component(), ny in component(), sxy in component(), theta in -360.0..360.0f64) {
        let s = PlaneState::new(nx, ny, sxy);
        let a = transform(s, theta);
        let b = transform(s, theta + 360.0);
        let tol = 1e-9 * scale(&s);
        prop_assert!((a.normal_x_prime - b.normal_x_prime).abs() <= tol);
        prop_assert!((a.normal_y_prime - b.normal_y_prime).abs() <= tol);
        prop_assert!((a.shear_xy_prime - b.shear_xy_prime).abs() <= tol);
    }

    #[test]
    fn principal_values_are_ordered(nx in component(), ny in component(), sxy in component()) {
        let p = principal(PlaneState::new(nx, ny, sxy));
        prop_assert!(p.value_1 >= p.value_2);
    }

    #[test]
    fn principal_directions_are_orthogonal(nx in component(), ny in component(), sxy in component()) {
        let p = principal(PlaneState::new(nx, ny, sxy));
        let gap = (p.angle_2_deg - p.angle_1_deg).rem_euclid(360.0);
        prop_assert!((gap - 90.0).abs() < 1e-9 || (gap - 270.0).abs() < 1e-9);
    }

    #[test]
    fn rotating_to_angle_1_reproduces_value_1(nx in component(), ny in component(), sxy in component()) {
        let s = PlaneState::new(nx, ny, sxy);
        // Below radius 1 the integer tie-break may keep the σ2 direction.
        prop_assume!(s.radius() >= 1.0);
        let p = principal(s);
        let r = transform(s, p.angle_1_deg);
        let tol = 1e-9 * scale(&s);
        prop_assert!((r.normal_x_prime - p.value_1).abs() <= tol);
        prop_assert!((r.normal_y_prime - p.value_2).abs() <= tol);
        prop_assert!(r.shear_xy_prime.abs() <= tol);
    }

    #[test]
    fn max_shear_is_signed_radius(nx in component(), ny in component(), sxy in component()) {
        let s = PlaneState::new(nx, ny, sxy);
        let p = principal(s);
        prop_assert!((p.shear_max.abs() - s.radius()).abs() <= 1e-9 * scale(&s));
        let at = transform(s, p.angle_shear_max_deg);
        prop_assert!((at.normal_x_prime - p.normal_at_shear_max).abs() <= 1e-9 * scale(&s));
    }
}
