//! Records for failure analysis: inputs, limits, verdicts.

use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_finite, ensure_strength, Error, Result};
use crate::transform::PrincipalResult;

/// In-plane principal stresses fed to a criterion.
///
/// The criteria do not require `sigma_1 >= sigma_2`; callers may pass
/// values typed into a form in either order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrincipalStresses {
    pub sigma_1: f64,
    pub sigma_2: f64,
}

impl PrincipalStresses {
    #[inline]
    pub fn new(sigma_1: f64, sigma_2: f64) -> Self {
        Self { sigma_1, sigma_2 }
    }

    pub fn checked(sigma_1: f64, sigma_2: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_finite("sigma_1", sigma_1)?,
            ensure_finite("sigma_2", sigma_2)?,
        ))
    }
}

impl From<PrincipalResult> for PrincipalStresses {
    fn from(p: PrincipalResult) -> Self {
        Self::new(p.value_1, p.value_2)
    }
}

/// Safety factor with the zero-denominator case made explicit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SafetyFactor {
    Finite(f64),
    /// The denominator (governing stress, or `r_max` for Mohr) was exactly zero.
    Undefined,
}

impl SafetyFactor {
    /// `num / den`, or `Undefined` when `den == 0`.
    #[inline]
    pub fn ratio(num: f64, den: f64) -> Self {
        if den == 0.0 {
            SafetyFactor::Undefined
        } else {
            SafetyFactor::Finite(num / den)
        }
    }

    /// Numeric value; `Undefined` maps to `+∞`.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            SafetyFactor::Finite(v) => *v,
            SafetyFactor::Undefined => f64::INFINITY,
        }
    }

    #[inline]
    pub fn finite(&self) -> Option<f64> {
        match self {
            SafetyFactor::Finite(v) => Some(*v),
            SafetyFactor::Undefined => None,
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, SafetyFactor::Undefined)
    }
}

impl fmt::Display for SafetyFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyFactor::Finite(v) => fmt::Display::fmt(v, f),
            SafetyFactor::Undefined => f.write_str("∞"),
        }
    }
}

/// Outcome of one criterion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FailureVerdict {
    pub failed: bool,
    pub safety_factor: SafetyFactor,
    /// Equivalent stress the criterion compared (circle radius for Mohr).
    pub governing: f64,
}

/// Material limits, one shape per family of criteria.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialLimit {
    /// Ductile yield point (Tresca, von Mises).
    Yield { yield_strength: f64 },
    /// Single ultimate strength (Rankine).
    Ultimate { ultimate_strength: f64 },
    /// Separate tension/compression strengths (Mohr).
    Brittle {
        ultimate_tension: f64,
        ultimate_compression: f64,
    },
}

impl MaterialLimit {
    pub fn yield_point(yield_strength: f64) -> Result<Self> {
        Ok(MaterialLimit::Yield {
            yield_strength: ensure_strength("yield_strength", yield_strength)?,
        })
    }

    pub fn ultimate(ultimate_strength: f64) -> Result<Self> {
        Ok(MaterialLimit::Ultimate {
            ultimate_strength: ensure_strength("ultimate_strength", ultimate_strength)?,
        })
    }

    pub fn brittle(ultimate_tension: f64, ultimate_compression: f64) -> Result<Self> {
        Ok(MaterialLimit::Brittle {
            ultimate_tension: ensure_strength("ultimate_tension", ultimate_tension)?,
            ultimate_compression: ensure_strength("ultimate_compression", ultimate_compression)?,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MaterialLimit::Yield { .. } => "yield",
            MaterialLimit::Ultimate { .. } => "ultimate",
            MaterialLimit::Brittle { .. } => "brittle",
        }
    }
}

/// Material families offered by the failure page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialClass {
    Ductile,
    Brittle,
}

/// Closed set of supported criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Criterion {
    Tresca,
    VonMises,
    Rankine,
    Mohr,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Tresca,
        Criterion::VonMises,
        Criterion::Rankine,
        Criterion::Mohr,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Tresca => "tresca",
            Criterion::VonMises => "von-mises",
            Criterion::Rankine => "rankine",
            Criterion::Mohr => "mohr",
        }
    }

    /// Criteria that apply to a material family.
    pub fn for_material(class: MaterialClass) -> &'static [Criterion] {
        match class {
            MaterialClass::Ductile => &[Criterion::Tresca, Criterion::VonMises],
            MaterialClass::Brittle => &[Criterion::Rankine, Criterion::Mohr],
        }
    }

    pub fn material_class(&self) -> MaterialClass {
        match self {
            Criterion::Tresca | Criterion::VonMises => MaterialClass::Ductile,
            Criterion::Rankine | Criterion::Mohr => MaterialClass::Brittle,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "tresca" => Ok(Criterion::Tresca),
            "von-mises" | "vonmises" => Ok(Criterion::VonMises),
            "rankine" => Ok(Criterion::Rankine),
            "mohr" => Ok(Criterion::Mohr),
            _ => Err(Error::UnknownCriterion(s.to_string())),
        }
    }
}
