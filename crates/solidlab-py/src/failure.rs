//! Failure-criterion bindings.
//!
//! Verdicts come back as `(failed, safety_factor, governing)`. An undefined
//! safety factor (zero governing stress) is returned as `inf`.

use crate::common::{map_err, points};
use pyo3::prelude::*;
use solidlab::failure::{
    self, Criterion, FailureVerdict, MaterialLimit, PrincipalStresses,
};

type Verdict = (bool, f64, f64);

fn verdict(v: FailureVerdict) -> Verdict {
    (v.failed, v.safety_factor.value(), v.governing)
}

fn run(
    criterion: Criterion,
    s1: f64,
    s2: f64,
    limit: solidlab::Result<MaterialLimit>,
) -> PyResult<Verdict> {
    let stresses = PrincipalStresses::checked(s1, s2).map_err(map_err)?;
    let limit = limit.map_err(map_err)?;
    failure::evaluate(criterion, stresses, &limit)
        .map(verdict)
        .map_err(map_err)
}

#[pyfunction]
pub fn tresca(s1: f64, s2: f64, sigma_yield: f64) -> PyResult<Verdict> {
    run(Criterion::Tresca, s1, s2, MaterialLimit::yield_point(sigma_yield))
}

#[pyfunction]
pub fn von_mises(s1: f64, s2: f64, sigma_yield: f64) -> PyResult<Verdict> {
    run(Criterion::VonMises, s1, s2, MaterialLimit::yield_point(sigma_yield))
}

#[pyfunction]
pub fn rankine(s1: f64, s2: f64, sigma_u: f64) -> PyResult<Verdict> {
    run(Criterion::Rankine, s1, s2, MaterialLimit::ultimate(sigma_u))
}

/// Compression strength first, as in the core.
#[pyfunction]
pub fn mohr(s1: f64, s2: f64, sigma_uc: f64, sigma_ut: f64) -> PyResult<Verdict> {
    run(Criterion::Mohr, s1, s2, MaterialLimit::brittle(sigma_ut, sigma_uc))
}

/// Returns `(r_c, r_t, cos_alpha, sin_alpha, compression_tangent, tension_tangent)`.
#[pyfunction]
pub fn mohr_envelope(
    sigma_uc: f64,
    sigma_ut: f64,
) -> PyResult<(f64, f64, f64, f64, (f64, f64), (f64, f64))> {
    MaterialLimit::brittle(sigma_ut, sigma_uc).map_err(map_err)?;
    let e = failure::mohr_envelope_geometry(sigma_uc, sigma_ut);
    Ok((
        e.compression_radius,
        e.tension_radius,
        e.cos_alpha,
        e.sin_alpha,
        (e.compression_tangent.x, e.compression_tangent.y),
        (e.tension_tangent.x, e.tension_tangent.y),
    ))
}

/// Outline of the safe region in the (σ1, σ2) plane for one criterion.
#[pyfunction]
#[pyo3(signature = (criterion, strength, samples = solidlab::cfg::OUTLINE_SAMPLES))]
pub fn yield_locus(criterion: &str, strength: f64, samples: usize) -> PyResult<Vec<(f64, f64)>> {
    let c: Criterion = criterion.parse().map_err(map_err)?;
    failure::locus(c, strength, samples)
        .map(points)
        .map_err(map_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tresca, m)?)?;
    m.add_function(wrap_pyfunction!(von_mises, m)?)?;
    m.add_function(wrap_pyfunction!(rankine, m)?)?;
    m.add_function(wrap_pyfunction!(mohr, m)?)?;
    m.add_function(wrap_pyfunction!(mohr_envelope, m)?)?;
    m.add_function(wrap_pyfunction!(yield_locus, m)?)?;
    Ok(())
}
