//! TOML configuration for the CLI.
//!
//! Holds material limits (so a class can share one file of course
//! materials) and output formatting. Every field is optional; values given
//! on the command line override the file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use solidlab::failure::{Criterion, MaterialLimit};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub material: MaterialConfig,
    pub output: OutputConfig,
}

/// Strength values; units are whatever the stresses use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Yield point for Tresca and von Mises
    pub yield_strength: Option<f64>,
    /// Ultimate strength for Rankine
    pub ultimate_strength: Option<f64>,
    /// Ultimate tensile strength for Mohr
    pub ultimate_tension: Option<f64>,
    /// Ultimate compressive strength for Mohr
    pub ultimate_compression: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// File config if a path is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

impl MaterialConfig {
    /// Fields set in `flags` win over `self`.
    pub fn overridden_by(&self, flags: &MaterialConfig) -> MaterialConfig {
        MaterialConfig {
            yield_strength: flags.yield_strength.or(self.yield_strength),
            ultimate_strength: flags.ultimate_strength.or(self.ultimate_strength),
            ultimate_tension: flags.ultimate_tension.or(self.ultimate_tension),
            ultimate_compression: flags.ultimate_compression.or(self.ultimate_compression),
        }
    }

    /// Validated limit for one criterion.
    pub fn limit_for(&self, criterion: Criterion) -> Result<MaterialLimit> {
        let limit = match criterion {
            Criterion::Tresca | Criterion::VonMises => match self.yield_strength {
                Some(y) => MaterialLimit::yield_point(y)?,
                None => bail!("{criterion} needs a yield strength (--yield-strength)"),
            },
            Criterion::Rankine => match self.ultimate_strength {
                Some(u) => MaterialLimit::ultimate(u)?,
                None => bail!("{criterion} needs an ultimate strength (--ultimate)"),
            },
            Criterion::Mohr => match (self.ultimate_tension, self.ultimate_compression) {
                (Some(ut), Some(uc)) => MaterialLimit::brittle(ut, uc)?,
                _ => bail!("{criterion} needs both --ut and --uc"),
            },
        };
        Ok(limit)
    }

    /// Every criterion the configured limits support, with its limit.
    pub fn available(&self) -> Result<Vec<(Criterion, MaterialLimit)>> {
        let mut out = Vec::new();
        for criterion in Criterion::ALL {
            let has_limit = match criterion {
                Criterion::Tresca | Criterion::VonMises => self.yield_strength.is_some(),
                Criterion::Rankine => self.ultimate_strength.is_some(),
                Criterion::Mohr => {
                    self.ultimate_tension.is_some() && self.ultimate_compression.is_some()
                }
            };
            if has_limit {
                out.push((criterion, self.limit_for(criterion)?));
            }
        }
        if out.is_empty() {
            bail!("no material limits given; pass --yield-strength, --ultimate or --ut/--uc");
        }
        Ok(out)
    }
}
