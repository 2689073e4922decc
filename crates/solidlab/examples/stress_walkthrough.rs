//! Walk through one plane-stress state the way the dashboard pages do.
//!
//! Purpose
//! - Show the call sequence a presentation layer uses: principal analysis,
//!   a rotated element at the current slider angle, Mohr-circle points, and
//!   the failure verdicts for the resulting principal stresses.

use solidlab::circle::point_at;
use solidlab::prelude::*;

fn main() -> solidlab::Result<()> {
    let state = PlaneState::checked(10.0, 0.0, 5.0)?;
    let p = principal(state);
    println!(
        "sigma_1={:.2} sigma_2={:.2} theta_1={:.2}° theta_2={:.2}°",
        p.value_1, p.value_2, p.angle_1_deg, p.angle_2_deg
    );
    println!(
        "tau_max={:.2} sigma_tau={:.2} theta_tau={:.2}°",
        p.shear_max, p.normal_at_shear_max, p.angle_shear_max_deg
    );

    let theta = 30.0;
    let r = transform(state, theta);
    let circle = MohrCircle::of(state);
    let pt = point_at(state, theta);
    println!(
        "at {theta:.1}°: sx'={:.2} sy'={:.2} txy'={:.2} (circle c={:.2} r={:.2}, point=({:.2}, {:.2}))",
        r.normal_x_prime, r.normal_y_prime, r.shear_xy_prime, circle.center, circle.radius, pt.x, pt.y
    );

    let stresses = PrincipalStresses::from(p);
    let ductile = MaterialLimit::yield_point(10.0)?;
    for (criterion, verdict) in evaluate_all(stresses, &ductile) {
        println!(
            "{criterion}: failed={} fs={:.2}",
            verdict.failed, verdict.safety_factor
        );
    }
    let brittle = MaterialLimit::brittle(10.0, 30.0)?;
    let verdict = evaluate(Criterion::Mohr, stresses, &brittle)?;
    println!("mohr: failed={} fs={:.2}", verdict.failed, verdict.safety_factor);
    Ok(())
}
