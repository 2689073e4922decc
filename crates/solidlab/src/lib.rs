//! Plane stress/strain transformation and failure criteria.
//!
//! Two leaf components share one piece of geometry:
//! - `transform`: rotate a 2D symmetric tensor, extract principal values,
//!   principal directions and the orientation of maximum shear.
//! - `failure`: Tresca, von Mises, Rankine and Mohr verdicts from principal
//!   stresses, plus the envelope/locus geometry diagrams need.
//! - `circle`: Mohr's circle center/radius and diagram points.
//!
//! Everything here is a pure function over `Copy` values. Callers own any
//! UI state (e.g. the current angle) and re-query on every change.

pub mod api;
pub mod cfg;
pub mod circle;
pub mod error;
pub mod failure;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::MohrCircle;
pub use error::{Error, Result};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circle::MohrCircle;
    pub use crate::failure::{
        evaluate, evaluate_all, mohr, mohr_envelope_geometry, rankine, rankine_locus, tresca,
        tresca_locus, von_mises, von_mises_locus, Criterion, FailureVerdict, MaterialClass,
        MaterialLimit, MohrEnvelope, PrincipalStresses, SafetyFactor,
    };
    pub use crate::transform::{
        principal, principal_strain, transform, transform_strain, PlaneState, PrincipalResult,
        PrincipalStrain, RotatedState, RotatedStrain, StrainState,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
