use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_err(err: solidlab::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn points(v: Vec<Vector2<f64>>) -> Vec<(f64, f64)> {
    v.into_iter().map(|p| (p.x, p.y)).collect()
}
