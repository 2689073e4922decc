//! Mohr's circle geometry shared by the transformation and failure code.
//!
//! Diagram convention: the reference state is plotted at `(nx, sxy)` while a
//! rotated face is plotted at `(nx', -sxy')` (shear positive downward for
//! rotated points, as on the dashboard). Both conventions are exposed so a
//! renderer can reproduce the same picture.

use nalgebra::Vector2;

use crate::cfg::OUTLINE_SAMPLES;
use crate::transform::{transform, PlaneState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MohrCircle {
    pub center: f64,
    pub radius: f64,
}

impl MohrCircle {
    #[inline]
    pub fn new(center: f64, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle of all (normal, shear) pairs reachable by rotating `state`.
    #[inline]
    pub fn of(state: PlaneState) -> Self {
        Self::new(state.center(), state.radius())
    }

    /// Circle through two principal values, as used by the Mohr criterion.
    #[inline]
    pub fn from_principal(sigma_1: f64, sigma_2: f64) -> Self {
        Self::new((sigma_1 + sigma_2) / 2.0, (sigma_1 - sigma_2).abs() / 2.0)
    }

    /// Largest and smallest normal value on the circle.
    #[inline]
    pub fn extremes(&self) -> (f64, f64) {
        (self.center + self.radius, self.center - self.radius)
    }

    /// `n` points on the circle for `t` in `[0, 2π]`, endpoints included.
    pub fn outline(&self, n: usize) -> Vec<Vector2<f64>> {
        linspace(0.0, std::f64::consts::TAU, n)
            .map(|t| Vector2::new(self.center + self.radius * t.cos(), self.radius * t.sin()))
            .collect()
    }

    /// Outline with the default sample count.
    pub fn default_outline(&self) -> Vec<Vector2<f64>> {
        self.outline(OUTLINE_SAMPLES)
    }
}

/// Point of the unrotated state: `(nx, sxy)`.
#[inline]
pub fn reference_point(state: PlaneState) -> Vector2<f64> {
    Vector2::new(state.normal_x, state.shear_xy)
}

/// Diagram point of the face rotated by `theta_deg`: `(nx', -sxy')`.
pub fn point_at(state: PlaneState, theta_deg: f64) -> Vector2<f64> {
    let r = transform(state, theta_deg);
    Vector2::new(r.normal_x_prime, -r.shear_xy_prime)
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}
