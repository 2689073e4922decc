//! PyO3 bindings for the `solidlab` core.
//!
//! Notes
//! - Bindings stay thin: tuples in, tuples out. Dashboards wrap them in
//!   their own plotting code.
//! - Invalid inputs raise `ValueError` with the core's error message.

use pyo3::prelude::*;

mod common;
mod failure;
mod transform;

#[pymodule]
fn solidlab_native(_py: Python, m: &PyModule) -> PyResult<()> {
    transform::register(m)?;
    failure::register(m)?;
    m.add("__version__", solidlab::VERSION)?;
    Ok(())
}
