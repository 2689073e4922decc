//! Value records for plane tensors and their transformed forms.
//!
//! - `PlaneState`: symmetric 2D tensor `[[nx, sxy], [sxy, ny]]`.
//! - `RotatedState`: the same tensor seen from axes rotated by θ.
//! - `PrincipalResult`: principal values/directions and the max-shear plane.
//! - `StrainState`: strain with engineering shear γxy (tensor shear γxy/2).

use nalgebra::Matrix2;

use crate::error::{ensure_finite, Result};

/// Symmetric 2D stress (or tensor strain) at the reference orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneState {
    pub normal_x: f64,
    pub normal_y: f64,
    pub shear_xy: f64,
}

impl PlaneState {
    #[inline]
    pub fn new(normal_x: f64, normal_y: f64, shear_xy: f64) -> Self {
        Self {
            normal_x,
            normal_y,
            shear_xy,
        }
    }

    /// Like `new`, but rejects NaN/inf components.
    pub fn checked(normal_x: f64, normal_y: f64, shear_xy: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_finite("normal_x", normal_x)?,
            ensure_finite("normal_y", normal_y)?,
            ensure_finite("shear_xy", shear_xy)?,
        ))
    }

    /// Mean normal component, the Mohr-circle center.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.normal_x + self.normal_y) / 2.0
    }

    /// Half the normal difference, `(nx - ny)/2`.
    #[inline]
    pub fn half_difference(&self) -> f64 {
        (self.normal_x - self.normal_y) / 2.0
    }

    /// Mohr-circle radius, the unsigned maximum in-plane shear.
    #[inline]
    pub fn radius(&self) -> f64 {
        (self.half_difference().powi(2) + self.shear_xy.powi(2)).sqrt()
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.normal_x + self.normal_y
    }

    /// Full symmetric matrix `[[nx, sxy], [sxy, ny]]`.
    #[rustfmt::skip]
    pub fn to_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(
            self.normal_x, self.shear_xy,
            self.shear_xy, self.normal_y,
        )
    }

    /// Reads the lower-left entry for shear; assumes a symmetric input.
    pub fn from_matrix(m: &Matrix2<f64>) -> Self {
        Self::new(m[(0, 0)], m[(1, 1)], m[(1, 0)])
    }
}

/// Components of a `PlaneState` on axes rotated by θ.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotatedState {
    pub normal_x_prime: f64,
    pub normal_y_prime: f64,
    pub shear_xy_prime: f64,
}

impl RotatedState {
    #[inline]
    pub fn trace(&self) -> f64 {
        self.normal_x_prime + self.normal_y_prime
    }
}

/// Principal values and orientations.
///
/// `value_1 >= value_2`. Angles are in degrees; `angle_2_deg` is
/// `angle_1_deg ± 90`. `shear_max` is signed: it is the rotated shear at
/// `angle_shear_max_deg`, so its sign tells diagrams which way the
/// max-shear element is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrincipalResult {
    pub value_1: f64,
    pub value_2: f64,
    pub angle_1_deg: f64,
    pub angle_2_deg: f64,
    pub shear_max: f64,
    pub normal_at_shear_max: f64,
    pub angle_shear_max_deg: f64,
}

/// Plane strain with engineering shear strain γxy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrainState {
    pub normal_x: f64,
    pub normal_y: f64,
    pub shear_engineering: f64,
}

impl StrainState {
    #[inline]
    pub fn new(normal_x: f64, normal_y: f64, shear_engineering: f64) -> Self {
        Self {
            normal_x,
            normal_y,
            shear_engineering,
        }
    }

    /// Tensor form: off-diagonal term is γxy/2.
    #[inline]
    pub fn to_tensor(&self) -> PlaneState {
        PlaneState::new(self.normal_x, self.normal_y, self.shear_engineering / 2.0)
    }
}

/// Strain components on rotated axes, shear reported as engineering γ'.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotatedStrain {
    pub normal_x_prime: f64,
    pub normal_y_prime: f64,
    pub shear_engineering_prime: f64,
}

/// Principal strains. Wraps the tensor result; shear there is γ/2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrincipalStrain {
    pub tensor: PrincipalResult,
}

impl PrincipalStrain {
    #[inline]
    pub fn value_1(&self) -> f64 {
        self.tensor.value_1
    }
    #[inline]
    pub fn value_2(&self) -> f64 {
        self.tensor.value_2
    }
    /// Signed maximum engineering shear strain, `2 · shear_max`.
    #[inline]
    pub fn max_engineering_shear(&self) -> f64 {
        2.0 * self.tensor.shear_max
    }
    /// Normal strain on the planes of maximum shear.
    #[inline]
    pub fn normal_at_shear_max(&self) -> f64 {
        self.tensor.normal_at_shear_max
    }
}
