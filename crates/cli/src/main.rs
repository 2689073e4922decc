mod config;
mod provenance;
mod sweep;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::{json, Value};
use solidlab::cfg::{ANGLE_RANGE_DEG, OUTLINE_SAMPLES};
use solidlab::circle::{point_at, reference_point, MohrCircle};
use solidlab::failure::{
    evaluate, mohr_envelope_geometry, Criterion, FailureVerdict, PrincipalStresses, SafetyFactor,
};
use solidlab::transform::{
    principal, transform, PlaneState, PrincipalResult, StrainState,
};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use config::{Config, MaterialConfig};
use sweep::Quantity;

#[derive(Parser)]
#[command(name = "solidlab")]
#[command(about = "Plane stress/strain transformation, Mohr's circle and failure criteria")]
struct Cmd {
    /// TOML file with material limits and output settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace); RUST_LOG wins if set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

/// A plane state from the command line.
#[derive(Args, Clone, Copy, Debug)]
struct StateArgs {
    /// Normal component along x (σx or εx)
    #[arg(long, allow_negative_numbers = true)]
    sx: f64,
    /// Normal component along y (σy or εy)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    sy: f64,
    /// Shear component (τxy, or engineering γxy with --strain)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    txy: f64,
    /// Interpret the inputs as strains
    #[arg(long)]
    strain: bool,
}

impl StateArgs {
    fn quantity(&self) -> Quantity {
        if self.strain {
            Quantity::Strain
        } else {
            Quantity::Stress
        }
    }

    /// Tensor state; strain shear is halved.
    fn tensor(&self) -> Result<PlaneState> {
        let s = PlaneState::checked(self.sx, self.sy, self.txy)?;
        Ok(if self.strain {
            StrainState::new(s.normal_x, s.normal_y, s.shear_xy).to_tensor()
        } else {
            s
        })
    }

    /// Scale applied to tensor shear on output.
    fn shear_scale(&self) -> f64 {
        if self.strain {
            2.0
        } else {
            1.0
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Components on axes rotated by --theta degrees
    Transform {
        #[command(flatten)]
        state: StateArgs,
        #[arg(long, allow_negative_numbers = true)]
        theta: f64,
    },
    /// Principal values, principal angles and maximum shear
    Principal {
        #[command(flatten)]
        state: StateArgs,
    },
    /// Mohr's circle center, radius and outline points
    Circle {
        #[command(flatten)]
        state: StateArgs,
        /// Also report the diagram point of the face rotated by this angle
        #[arg(long, allow_negative_numbers = true)]
        theta: Option<f64>,
        #[arg(long, default_value_t = OUTLINE_SAMPLES)]
        samples: usize,
    },
    /// Failure verdicts for principal stresses
    Failure {
        #[arg(long, allow_negative_numbers = true)]
        s1: f64,
        #[arg(long, allow_negative_numbers = true)]
        s2: f64,
        /// tresca | von-mises | rankine | mohr (default: every criterion with a limit)
        #[arg(long)]
        criterion: Option<Criterion>,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Mohr failure-envelope tangent points
    Envelope {
        /// Ultimate compressive strength
        #[arg(long)]
        uc: Option<f64>,
        /// Ultimate tensile strength
        #[arg(long)]
        ut: Option<f64>,
    },
    /// Tabulate the rotated state over an angle range to CSV or Parquet
    Sweep {
        #[command(flatten)]
        state: StateArgs,
        #[arg(long, default_value_t = ANGLE_RANGE_DEG.0, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, default_value_t = ANGLE_RANGE_DEG.1, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug, Default)]
struct LimitArgs {
    /// Yield strength (Tresca, von Mises)
    #[arg(long = "yield-strength")]
    yield_strength: Option<f64>,
    /// Ultimate strength (Rankine)
    #[arg(long)]
    ultimate: Option<f64>,
    /// Ultimate tensile strength (Mohr)
    #[arg(long)]
    ut: Option<f64>,
    /// Ultimate compressive strength (Mohr)
    #[arg(long)]
    uc: Option<f64>,
}

impl From<LimitArgs> for MaterialConfig {
    fn from(l: LimitArgs) -> Self {
        MaterialConfig {
            yield_strength: l.yield_strength,
            ultimate_strength: l.ultimate,
            ultimate_tension: l.ut,
            ultimate_compression: l.uc,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);
    let cfg = Config::load(cmd.config.as_deref())?;
    let pretty = cfg.output.pretty;
    let out = match cmd.action {
        Action::Transform { state, theta } => run_transform(state, theta)?,
        Action::Principal { state } => run_principal(state)?,
        Action::Circle {
            state,
            theta,
            samples,
        } => run_circle(state, theta, samples)?,
        Action::Failure {
            s1,
            s2,
            criterion,
            limits,
        } => run_failure(s1, s2, criterion, &cfg.material.overridden_by(&limits.into()))?,
        Action::Envelope { uc, ut } => {
            let flags = MaterialConfig {
                ultimate_compression: uc,
                ultimate_tension: ut,
                ..Default::default()
            };
            run_envelope(&cfg.material.overridden_by(&flags))?
        }
        Action::Sweep {
            state,
            from,
            to,
            step,
            out,
        } => run_sweep(state, from, to, step, out)?,
        Action::Report => report(),
    };
    emit(&out, pretty)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn run_transform(state: StateArgs, theta: f64) -> Result<Value> {
    let tensor = state.tensor()?;
    tracing::info!(?tensor, theta, quantity = state.quantity().name(), "transform");
    let r = transform(tensor, theta);
    let mut out = json!({
        "quantity": state.quantity().name(),
        "theta_deg": theta,
        "normal_x_prime": r.normal_x_prime,
        "normal_y_prime": r.normal_y_prime,
    });
    out[shear_key(state)] = json!(r.shear_xy_prime * state.shear_scale());
    Ok(out)
}

fn run_principal(state: StateArgs) -> Result<Value> {
    let tensor = state.tensor()?;
    let p = principal(tensor);
    tracing::info!(?tensor, value_1 = p.value_1, value_2 = p.value_2, "principal");
    Ok(principal_json(&p, state))
}

fn principal_json(p: &PrincipalResult, state: StateArgs) -> Value {
    json!({
        "quantity": state.quantity().name(),
        "value_1": p.value_1,
        "value_2": p.value_2,
        "angle_1_deg": p.angle_1_deg,
        "angle_2_deg": p.angle_2_deg,
        "shear_max": p.shear_max * state.shear_scale(),
        "normal_at_shear_max": p.normal_at_shear_max,
        "angle_shear_max_deg": p.angle_shear_max_deg,
    })
}

fn run_circle(state: StateArgs, theta: Option<f64>, samples: usize) -> Result<Value> {
    let tensor = state.tensor()?;
    let circle = MohrCircle::of(tensor);
    tracing::info!(center = circle.center, radius = circle.radius, samples, "circle");
    let outline: Vec<[f64; 2]> = circle.outline(samples).iter().map(|p| [p.x, p.y]).collect();
    let reference = reference_point(tensor);
    let rotated = theta.map(|t| {
        let p = point_at(tensor, t);
        json!({ "theta_deg": t, "point": [p.x, p.y] })
    });
    Ok(json!({
        "quantity": state.quantity().name(),
        "center": circle.center,
        "radius": circle.radius,
        "reference_point": [reference.x, reference.y],
        "rotated": rotated,
        "outline": outline,
    }))
}

fn run_failure(
    s1: f64,
    s2: f64,
    criterion: Option<Criterion>,
    material: &MaterialConfig,
) -> Result<Value> {
    let stresses = PrincipalStresses::checked(s1, s2)?;
    let selected = match criterion {
        Some(c) => vec![(c, material.limit_for(c)?)],
        None => material.available()?,
    };
    let mut verdicts = Vec::with_capacity(selected.len());
    for (c, limit) in selected {
        let v = evaluate(c, stresses, &limit).with_context(|| format!("evaluating {c}"))?;
        tracing::info!(criterion = c.name(), failed = v.failed, safety_factor = %v.safety_factor, "verdict");
        verdicts.push(verdict_json(c, &v));
    }
    Ok(json!({
        "sigma_1": s1,
        "sigma_2": s2,
        "verdicts": verdicts,
    }))
}

fn verdict_json(criterion: Criterion, v: &FailureVerdict) -> Value {
    let sf = match v.safety_factor {
        SafetyFactor::Finite(x) => json!(x),
        SafetyFactor::Undefined => Value::Null,
    };
    json!({
        "criterion": criterion.name(),
        "failed": v.failed,
        "safety_factor": sf,
        "governing": v.governing,
    })
}

fn run_envelope(material: &MaterialConfig) -> Result<Value> {
    // Validates both strengths before the arithmetic runs.
    material.limit_for(Criterion::Mohr)?;
    let (Some(uc), Some(ut)) = (material.ultimate_compression, material.ultimate_tension) else {
        anyhow::bail!("envelope needs both --uc and --ut");
    };
    let env = mohr_envelope_geometry(uc, ut);
    tracing::info!(uc, ut, cos_alpha = env.cos_alpha, "envelope");
    Ok(json!({
        "compression_radius": env.compression_radius,
        "tension_radius": env.tension_radius,
        "cos_alpha": env.cos_alpha,
        "sin_alpha": env.sin_alpha,
        "compression_tangent": [env.compression_tangent.x, env.compression_tangent.y],
        "tension_tangent": [env.tension_tangent.x, env.tension_tangent.y],
    }))
}

fn run_sweep(state: StateArgs, from: f64, to: f64, step: f64, out: PathBuf) -> Result<Value> {
    let tensor = state.tensor()?;
    let angles = sweep::angles(from, to, step)?;
    tracing::info!(rows = angles.len(), out = %out.display(), "sweep");
    let mut df = sweep::sweep_frame(tensor, &angles, state.quantity())?;
    sweep::write_frame(&mut df, &out)?;
    let params = json!({
        "quantity": state.quantity().name(),
        "sx": state.sx,
        "sy": state.sy,
        "txy": state.txy,
        "from": from,
        "to": to,
        "step": step,
    });
    let sidecar = provenance::write_sidecar(&out, params)?;
    tracing::debug!(sidecar = %sidecar.display(), "provenance written");
    Ok(json!({
        "rows": df.height(),
        "outputs": [out.to_string_lossy(), sidecar.to_string_lossy()],
    }))
}

fn report() -> Value {
    json!({
        "code_rev": provenance::current_git_rev(),
        "solidlab_version": solidlab::VERSION,
        "criteria": Criterion::ALL.iter().map(|c| c.name()).collect::<Vec<_>>(),
    })
}

fn shear_key(state: StateArgs) -> &'static str {
    if state.strain {
        "shear_engineering_prime"
    } else {
        "shear_xy_prime"
    }
}
