//! Angle sweeps: tabulate the rotated state over a range of angles.
//!
//! The table is what a plotting front end needs to animate the rotated
//! element and trace the point around Mohr's circle.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use solidlab::cfg::MAX_SWEEP_ROWS;
use solidlab::circle::point_at;
use solidlab::transform::{transform, PlaneState};
use std::fs::File;
use std::path::Path;

/// What the tensor components represent; strain reports engineering shear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    Stress,
    Strain,
}

impl Quantity {
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Stress => "stress",
            Quantity::Strain => "strain",
        }
    }

    fn shear_column(&self) -> &'static str {
        match self {
            Quantity::Stress => "shear_xy_prime",
            Quantity::Strain => "shear_engineering_prime",
        }
    }

    fn shear_scale(&self) -> f64 {
        match self {
            Quantity::Stress => 1.0,
            Quantity::Strain => 2.0,
        }
    }
}

/// Angles from `from` to `to` inclusive, `step` apart.
pub fn angles(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        bail!("step must be positive, got {step}");
    }
    if !from.is_finite() || !to.is_finite() || to < from {
        bail!("invalid angle range [{from}, {to}]");
    }
    // Small slack so `to` is kept despite float accumulation.
    let rows = ((to - from) / step + 1e-9).floor() + 1.0;
    if !rows.is_finite() || rows > MAX_SWEEP_ROWS as f64 {
        bail!("sweep of [{from}, {to}] by {step} exceeds {MAX_SWEEP_ROWS} rows");
    }
    let n = rows as usize;
    Ok((0..n).map(|i| from + step * i as f64).collect())
}

/// One row per angle: rotated components and the Mohr-diagram point.
///
/// `state` is the tensor form; for strain its shear is γ/2.
pub fn sweep_frame(state: PlaneState, angles: &[f64], quantity: Quantity) -> PolarsResult<DataFrame> {
    let n = angles.len();
    let mut nx = Vec::with_capacity(n);
    let mut ny = Vec::with_capacity(n);
    let mut sxy = Vec::with_capacity(n);
    let mut cx = Vec::with_capacity(n);
    let mut cy = Vec::with_capacity(n);
    for &theta in angles {
        let r = transform(state, theta);
        let p = point_at(state, theta);
        nx.push(r.normal_x_prime);
        ny.push(r.normal_y_prime);
        sxy.push(r.shear_xy_prime * quantity.shear_scale());
        cx.push(p.x);
        cy.push(p.y);
    }
    df!(
        "theta_deg" => angles.to_vec(),
        "normal_x_prime" => nx,
        "normal_y_prime" => ny,
        quantity.shear_column() => sxy,
        "circle_x" => cx,
        "circle_y" => cy,
    )
}

/// Write `df` as CSV or Parquet, chosen by the file extension.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let file = || File::create(out).with_context(|| format!("creating {}", out.display()));
    match ext.as_deref() {
        Some("csv") => {
            let mut f = file()?;
            CsvWriter::new(&mut f).include_header(true).finish(df)?;
        }
        Some("parquet") => {
            ParquetWriter::new(file()?).finish(df)?;
        }
        _ => bail!("unsupported output extension for {} (use .csv or .parquet)", out.display()),
    }
    Ok(())
}
