//! Transformation, principal and Mohr-circle bindings.

use crate::common::{map_err, points};
use pyo3::prelude::*;
use solidlab::circle::{point_at, MohrCircle};
use solidlab::transform::{self, PlaneState, StrainState};

/// Returns `(nx', ny', sxy')` for axes rotated by `theta_deg`.
#[pyfunction]
pub fn transform_stress(nx: f64, ny: f64, sxy: f64, theta_deg: f64) -> PyResult<(f64, f64, f64)> {
    let state = PlaneState::checked(nx, ny, sxy).map_err(map_err)?;
    let r = transform::transform(state, theta_deg);
    Ok((r.normal_x_prime, r.normal_y_prime, r.shear_xy_prime))
}

/// Returns `(σ1, σ2, θ1, θ2, τmax, σ_avg, θs)`, angles in degrees.
#[pyfunction]
pub fn principal_stress(
    nx: f64,
    ny: f64,
    sxy: f64,
) -> PyResult<(f64, f64, f64, f64, f64, f64, f64)> {
    let state = PlaneState::checked(nx, ny, sxy).map_err(map_err)?;
    let p = transform::principal(state);
    Ok((
        p.value_1,
        p.value_2,
        p.angle_1_deg,
        p.angle_2_deg,
        p.shear_max,
        p.normal_at_shear_max,
        p.angle_shear_max_deg,
    ))
}

/// Engineering shear in, engineering shear out: `(εx', εy', γ')`.
#[pyfunction]
pub fn transform_strain(ex: f64, ey: f64, gxy: f64, theta_deg: f64) -> PyResult<(f64, f64, f64)> {
    PlaneState::checked(ex, ey, gxy).map_err(map_err)?;
    let r = transform::transform_strain(StrainState::new(ex, ey, gxy), theta_deg);
    Ok((r.normal_x_prime, r.normal_y_prime, r.shear_engineering_prime))
}

/// Returns `(ε1, ε2, θ1, θ2, γmax, ε_avg, θs)`; `γmax` is engineering shear.
#[pyfunction]
pub fn principal_strain(
    ex: f64,
    ey: f64,
    gxy: f64,
) -> PyResult<(f64, f64, f64, f64, f64, f64, f64)> {
    PlaneState::checked(ex, ey, gxy).map_err(map_err)?;
    let p = transform::principal_strain(StrainState::new(ex, ey, gxy));
    Ok((
        p.value_1(),
        p.value_2(),
        p.tensor.angle_1_deg,
        p.tensor.angle_2_deg,
        p.max_engineering_shear(),
        p.normal_at_shear_max(),
        p.tensor.angle_shear_max_deg,
    ))
}

/// Returns `(center, radius, outline)`; `outline` has `samples` points.
#[pyfunction]
#[pyo3(signature = (nx, ny, sxy, samples = solidlab::cfg::OUTLINE_SAMPLES))]
pub fn mohr_circle(
    nx: f64,
    ny: f64,
    sxy: f64,
    samples: usize,
) -> PyResult<(f64, f64, Vec<(f64, f64)>)> {
    let state = PlaneState::checked(nx, ny, sxy).map_err(map_err)?;
    let c = MohrCircle::of(state);
    Ok((c.center, c.radius, points(c.outline(samples))))
}

/// Diagram point `(nx', -sxy')` of the face rotated by `theta_deg`.
#[pyfunction]
pub fn mohr_point(nx: f64, ny: f64, sxy: f64, theta_deg: f64) -> PyResult<(f64, f64)> {
    let state = PlaneState::checked(nx, ny, sxy).map_err(map_err)?;
    let p = point_at(state, theta_deg);
    Ok((p.x, p.y))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform_stress, m)?)?;
    m.add_function(wrap_pyfunction!(principal_stress, m)?)?;
    m.add_function(wrap_pyfunction!(transform_strain, m)?)?;
    m.add_function(wrap_pyfunction!(principal_strain, m)?)?;
    m.add_function(wrap_pyfunction!(mohr_circle, m)?)?;
    m.add_function(wrap_pyfunction!(mohr_point, m)?)?;
    Ok(())
}
