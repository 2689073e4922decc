//! Transformation Engine: plane stress/strain rotation and principal analysis.
//!
//! Purpose
//! - Express a 2D symmetric tensor on any rotated axes (`transform`).
//! - Extract principal values, the two orthogonal principal directions, and
//!   the signed maximum shear with its orientation (`principal`).
//! - Strain variants take and report engineering shear γ (`*_strain`).
//!
//! Conventions
//! - Angles in degrees at the API boundary, counterclockwise positive.
//! - `nx == ny` and `sxy == 0` are the zero-denominator cases of the angle
//!   formulas and fall back to 45°. In the isotropic case both hold and the
//!   reported angles carry no information.

mod principal;
mod rotate;
mod types;

pub use principal::{principal, principal_strain};
pub use rotate::{transform, transform_strain};
pub use types::{
    PlaneState, PrincipalResult, PrincipalStrain, RotatedState, RotatedStrain, StrainState,
};

#[cfg(test)]
mod tests;
