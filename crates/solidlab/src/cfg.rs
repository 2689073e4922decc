//! Numeric defaults shared by the transformation and diagram helpers.
//!
//! Policy
//! - Fixed constants, not a runtime config. The CLI layers its own TOML
//!   config on top for material limits and output formatting.

/// Angle (radians) used when the arctangent argument has a zero denominator.
pub const FALLBACK_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Sample count for circle and ellipse outlines.
pub const OUTLINE_SAMPLES: usize = 100;

/// Angle range of the interactive slider, in degrees.
pub const ANGLE_RANGE_DEG: (f64, f64) = (-180.0, 180.0);

/// Absolute tolerance for trace invariance under rotation.
pub const TRACE_EPS: f64 = 1e-9;

/// Upper bound on rows in one angle sweep.
pub const MAX_SWEEP_ROWS: usize = 1_000_000;
