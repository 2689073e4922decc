//! Failure-envelope and yield-locus geometry for diagrams.
//!
//! - `MohrEnvelope`: the straight envelope tangent to the uniaxial
//!   compression and tension circles, and its radius at a given center.
//! - `*_locus`: closed outlines of the Tresca, von Mises and Rankine
//!   regions in the σ1–σ2 plane.

use nalgebra::Vector2;

use crate::circle::{linspace, MohrCircle};
use crate::error::{Error, Result};

use super::types::{Criterion, MaterialClass, MaterialLimit};

/// Straight Mohr envelope built from `σuc` and `σut`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MohrEnvelope {
    /// `r_c = σuc / 2`.
    pub compression_radius: f64,
    /// `r_t = σut / 2`.
    pub tension_radius: f64,
    pub cos_alpha: f64,
    pub sin_alpha: f64,
    /// Tangent point on the compression circle.
    pub compression_tangent: Vector2<f64>,
    /// Tangent point on the tension circle.
    pub tension_tangent: Vector2<f64>,
}

impl MohrEnvelope {
    pub fn new(sigma_uc: f64, sigma_ut: f64) -> Self {
        let r_c = sigma_uc / 2.0;
        let r_t = sigma_ut / 2.0;
        let cos_alpha = (r_c - r_t) / (r_c + r_t);
        let sin_alpha = 2.0 * (r_c * r_t).sqrt() / (r_c + r_t);
        Self {
            compression_radius: r_c,
            tension_radius: r_t,
            cos_alpha,
            sin_alpha,
            compression_tangent: Vector2::new(-r_c * (1.0 - cos_alpha), r_c * sin_alpha),
            tension_tangent: Vector2::new(r_t * (1.0 + cos_alpha), r_t * sin_alpha),
        }
    }

    /// Largest admissible circle radius for a circle centered at `center`.
    ///
    /// Linear between the compression circle (center `-r_c`) and the
    /// tension circle (center `r_t`), extrapolated outside that range.
    #[inline]
    pub fn radius_limit(&self, center: f64) -> f64 {
        let r_c = self.compression_radius;
        let r_t = self.tension_radius;
        r_c - (r_c + center) * (r_c - r_t) / (r_c + r_t)
    }

    /// Uniaxial compression test circle.
    #[inline]
    pub fn compression_circle(&self) -> MohrCircle {
        MohrCircle::new(-self.compression_radius, self.compression_radius)
    }

    /// Uniaxial tension test circle.
    #[inline]
    pub fn tension_circle(&self) -> MohrCircle {
        MohrCircle::new(self.tension_radius, self.tension_radius)
    }
}

/// Envelope geometry from compression and tension strengths.
#[inline]
pub fn mohr_envelope_geometry(sigma_uc: f64, sigma_ut: f64) -> MohrEnvelope {
    MohrEnvelope::new(sigma_uc, sigma_ut)
}

/// Tresca hexagon, closed (first point repeated).
pub fn tresca_locus(sigma_yield: f64) -> Vec<Vector2<f64>> {
    let y = sigma_yield;
    vec![
        Vector2::new(y, 0.0),
        Vector2::new(y, y),
        Vector2::new(0.0, y),
        Vector2::new(-y, 0.0),
        Vector2::new(-y, -y),
        Vector2::new(0.0, -y),
        Vector2::new(y, 0.0),
    ]
}

/// von Mises ellipse, its major axis along σ1 = σ2.
///
/// Parameterized as `(y cos t - y/√3 sin t, y cos t + y/√3 sin t)` for
/// `t` in `[-2π, 2π]`, so the outline wraps twice.
pub fn von_mises_locus(sigma_yield: f64, n: usize) -> Vec<Vector2<f64>> {
    let y = sigma_yield;
    let b = y / 3.0_f64.sqrt();
    let two_pi = std::f64::consts::TAU;
    linspace(-two_pi, two_pi, n)
        .map(|t| {
            let (s, c) = t.sin_cos();
            Vector2::new(y * c - b * s, y * c + b * s)
        })
        .collect()
}

/// Rankine square, closed.
pub fn rankine_locus(sigma_u: f64) -> Vec<Vector2<f64>> {
    let u = sigma_u;
    vec![
        Vector2::new(u, u),
        Vector2::new(-u, u),
        Vector2::new(-u, -u),
        Vector2::new(u, -u),
        Vector2::new(u, u),
    ]
}

/// Locus of `criterion` for a single strength, validated as that
/// criterion's limit kind. Mohr needs two strengths and is rejected.
pub fn locus(criterion: Criterion, strength: f64, n: usize) -> Result<Vec<Vector2<f64>>> {
    match criterion.material_class() {
        MaterialClass::Ductile => MaterialLimit::yield_point(strength)?,
        MaterialClass::Brittle => MaterialLimit::ultimate(strength)?,
    };
    match criterion {
        Criterion::Tresca => Ok(tresca_locus(strength)),
        Criterion::VonMises => Ok(von_mises_locus(strength, n)),
        Criterion::Rankine => Ok(rankine_locus(strength)),
        Criterion::Mohr => Err(Error::LimitMismatch {
            criterion: criterion.name(),
            limit: "single-strength",
        }),
    }
}
