use super::*;
use crate::transform::{principal, PlaneState};
use approx::assert_relative_eq;
use nalgebra::Vector2;
use proptest::prelude::*;

fn finite_sf(v: &FailureVerdict) -> f64 {
    v.safety_factor
        .finite()
        .expect("finite safety factor expected")
}

#[test]
fn tresca_same_sign_uses_larger_magnitude() {
    let v = tresca(100.0, 100.0, 100.0);
    assert!(v.failed);
    assert_relative_eq!(v.governing, 100.0);
    assert_relative_eq!(finite_sf(&v), 1.0);

    let v = tresca(-40.0, -80.0, 100.0);
    assert!(!v.failed);
    assert_relative_eq!(v.governing, 80.0);
    assert_relative_eq!(finite_sf(&v), 1.25);
}

#[test]
fn tresca_opposite_sign_adds_magnitudes() {
    let v = tresca(100.0, -50.0, 100.0);
    assert!(v.failed);
    assert_relative_eq!(v.governing, 150.0);
    assert_relative_eq!(finite_sf(&v), 100.0 / 150.0);
}

#[test]
fn tresca_zero_component_is_its_own_sign() {
    // 0 and 60 differ in sign, so the sum branch runs; the value is the same.
    let v = tresca(0.0, 60.0, 100.0);
    assert_relative_eq!(v.governing, 60.0);
    let v = tresca(0.0, -60.0, 100.0);
    assert_relative_eq!(v.governing, 60.0);
}

#[test]
fn von_mises_uniaxial_and_shear() {
    let v = von_mises(100.0, 0.0, 100.0);
    assert!(v.failed);
    assert_relative_eq!(v.governing, 100.0);
    assert_relative_eq!(finite_sf(&v), 1.0);

    // Pure shear τ = 50: σ1 = 50, σ2 = -50, equivalent √3·τ.
    let v = von_mises(50.0, -50.0, 100.0);
    assert!(!v.failed);
    assert_relative_eq!(v.governing, 50.0 * 3.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn von_mises_equibiaxial_matches_uniaxial() {
    let v = von_mises(80.0, 80.0, 100.0);
    assert_relative_eq!(v.governing, 80.0, epsilon = 1e-12);
}

#[test]
fn rankine_scenario() {
    let v = rankine(50.0, -30.0, 100.0);
    assert!(!v.failed);
    assert_relative_eq!(v.governing, 50.0);
    assert_relative_eq!(finite_sf(&v), 2.0);

    let v = rankine(20.0, -120.0, 100.0);
    assert!(v.failed);
    assert_relative_eq!(finite_sf(&v), 100.0 / 120.0);
}

#[test]
fn zero_stress_is_safe_with_undefined_factor() {
    for v in [
        tresca(0.0, 0.0, 100.0),
        von_mises(0.0, 0.0, 100.0),
        rankine(0.0, 0.0, 100.0),
    ] {
        assert!(!v.failed);
        assert!(v.safety_factor.is_undefined());
        assert_eq!(v.safety_factor.value(), f64::INFINITY);
    }
}

#[test]
fn mohr_unloaded_state() {
    // r_c = 100, r_t = 50, r_max = 100 - 100·50/150.
    let v = mohr(0.0, 0.0, 200.0, 100.0);
    assert!(!v.failed);
    assert_relative_eq!(v.governing, 0.0);
    assert_relative_eq!(finite_sf(&v), 0.0);
    let env = mohr_envelope_geometry(200.0, 100.0);
    assert_relative_eq!(env.radius_limit(0.0), 200.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn mohr_uniaxial_tests_sit_on_envelope() {
    // Uniaxial tension at σut and compression at σuc both touch the envelope.
    let t = mohr(100.0, 0.0, 200.0, 100.0);
    assert!(t.failed);
    assert_relative_eq!(finite_sf(&t), 1.0, epsilon = 1e-12);

    let c = mohr(0.0, -200.0, 200.0, 100.0);
    assert!(c.failed);
    assert_relative_eq!(finite_sf(&c), 1.0, epsilon = 1e-12);
}

#[test]
fn mohr_factor_is_radius_over_limit() {
    let v = mohr(30.0, -30.0, 200.0, 100.0);
    assert!(!v.failed);
    assert_relative_eq!(v.governing, 30.0);
    assert_relative_eq!(finite_sf(&v), 30.0 / (200.0 / 3.0), epsilon = 1e-12);
}

#[test]
fn mohr_zero_limit_is_undefined() {
    // r_max hits zero at center = r_c·(r_c + r_t)/(r_c - r_t) - r_c.
    let env = MohrEnvelope::new(200.0, 100.0);
    let center = 100.0 * 150.0 / 50.0 - 100.0;
    assert_relative_eq!(env.radius_limit(center), 0.0, epsilon = 1e-12);
    let v = mohr(center, center, 200.0, 100.0);
    assert!(v.failed);
    assert!(v.safety_factor.is_undefined());
}

#[test]
fn envelope_geometry() {
    let env = mohr_envelope_geometry(200.0, 100.0);
    assert_relative_eq!(env.cos_alpha, 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(env.sin_alpha, 2.0 * 5000.0_f64.sqrt() / 150.0, epsilon = 1e-12);
    assert_relative_eq!(env.compression_tangent.x, -200.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(env.tension_tangent.x, 200.0 / 3.0, epsilon = 1e-9);

    // Tangent points lie on their test circles.
    let cc = env.compression_circle();
    let ct = env.tension_circle();
    let dc = (env.compression_tangent - Vector2::new(cc.center, 0.0)).norm();
    let dt = (env.tension_tangent - Vector2::new(ct.center, 0.0)).norm();
    assert_relative_eq!(dc, cc.radius, epsilon = 1e-9);
    assert_relative_eq!(dt, ct.radius, epsilon = 1e-9);
}

#[test]
fn equal_strengths_give_horizontal_envelope() {
    let env = mohr_envelope_geometry(100.0, 100.0);
    assert_relative_eq!(env.cos_alpha, 0.0);
    assert_relative_eq!(env.sin_alpha, 1.0, epsilon = 1e-12);
    assert_relative_eq!(env.radius_limit(-500.0), 50.0);
    assert_relative_eq!(env.radius_limit(500.0), 50.0);
}

#[test]
fn loci_are_closed() {
    let t = tresca_locus(250.0);
    assert_eq!(t.len(), 7);
    assert_eq!(t[0], t[6]);
    let r = rankine_locus(300.0);
    assert_eq!(r.len(), 5);
    assert_eq!(r[0], r[4]);
}

#[test]
fn von_mises_locus_satisfies_criterion() {
    for p in von_mises_locus(250.0, 100) {
        let v = von_mises(p.x, p.y, 250.0);
        assert_relative_eq!(v.governing, 250.0, epsilon = 1e-9);
    }
}

#[test]
fn tresca_locus_vertices_are_on_boundary() {
    for p in tresca_locus(250.0) {
        assert_relative_eq!(tresca(p.x, p.y, 250.0).governing, 250.0);
    }
}

#[test]
fn locus_validates_strength_by_material_class() {
    assert_eq!(
        locus(Criterion::Tresca, -1.0, 10),
        Err(Error::InvalidMaterialLimit {
            name: "yield_strength",
            value: -1.0
        })
    );
    assert_eq!(
        locus(Criterion::VonMises, 0.0, 10),
        Err(Error::InvalidMaterialLimit {
            name: "yield_strength",
            value: 0.0
        })
    );
    assert_eq!(
        locus(Criterion::Rankine, -5.0, 10),
        Err(Error::InvalidMaterialLimit {
            name: "ultimate_strength",
            value: -5.0
        })
    );
    assert!(matches!(
        locus(Criterion::Mohr, 100.0, 10),
        Err(Error::LimitMismatch { criterion: "mohr", .. })
    ));
    assert_eq!(locus(Criterion::Tresca, 250.0, 10).unwrap(), tresca_locus(250.0));
    assert_eq!(locus(Criterion::VonMises, 250.0, 10).unwrap().len(), 10);
}

#[test]
fn evaluate_dispatches_by_criterion() {
    let s = PrincipalStresses::new(50.0, -30.0);
    let yield_limit = MaterialLimit::yield_point(100.0).unwrap();
    let ult = MaterialLimit::ultimate(100.0).unwrap();
    let brittle = MaterialLimit::brittle(100.0, 200.0).unwrap();

    assert_eq!(
        evaluate(Criterion::Tresca, s, &yield_limit).unwrap(),
        tresca(50.0, -30.0, 100.0)
    );
    assert_eq!(
        evaluate(Criterion::VonMises, s, &yield_limit).unwrap(),
        von_mises(50.0, -30.0, 100.0)
    );
    assert_eq!(
        evaluate(Criterion::Rankine, s, &ult).unwrap(),
        rankine(50.0, -30.0, 100.0)
    );
    // Brittle limits are stored tension-first; mohr() takes compression first.
    assert_eq!(
        evaluate(Criterion::Mohr, s, &brittle).unwrap(),
        mohr(50.0, -30.0, 200.0, 100.0)
    );
}

#[test]
fn evaluate_rejects_mismatched_limit() {
    let s = PrincipalStresses::new(1.0, 0.0);
    let yield_limit = MaterialLimit::yield_point(100.0).unwrap();
    let err = evaluate(Criterion::Mohr, s, &yield_limit).unwrap_err();
    assert_eq!(
        err,
        Error::LimitMismatch {
            criterion: "mohr",
            limit: "yield"
        }
    );
    assert_eq!(err.to_string(), "criterion mohr cannot use a yield limit");
}

#[test]
fn evaluate_all_picks_matching_criteria() {
    let s = PrincipalStresses::new(100.0, 100.0);
    let yield_limit = MaterialLimit::yield_point(100.0).unwrap();
    let all = evaluate_all(s, &yield_limit);
    let names: Vec<_> = all.iter().map(|(c, _)| *c).collect();
    assert_eq!(names, Criterion::for_material(MaterialClass::Ductile).to_vec());
    assert!(all.iter().all(|(_, v)| v.failed));
}

#[test]
fn material_limits_are_validated() {
    assert!(MaterialLimit::yield_point(0.0).is_err());
    assert!(MaterialLimit::ultimate(-10.0).is_err());
    assert!(matches!(
        MaterialLimit::brittle(100.0, f64::NAN),
        Err(Error::InvalidMaterialLimit {
            name: "ultimate_compression",
            ..
        })
    ));
}

#[test]
fn criterion_names_round_trip() {
    for c in Criterion::ALL {
        assert_eq!(c.name().parse::<Criterion>().unwrap(), c);
        assert!(Criterion::for_material(c.material_class()).contains(&c));
    }
    assert_eq!("Von_Mises".parse::<Criterion>().unwrap(), Criterion::VonMises);
    assert!("coulomb".parse::<Criterion>().is_err());
}

#[test]
fn safety_factor_display() {
    assert_eq!(format!("{:.2}", SafetyFactor::Finite(1.23456)), "1.23");
    assert_eq!(SafetyFactor::Undefined.to_string(), "∞");
}

#[test]
fn principal_result_feeds_evaluator() {
    let p = principal(PlaneState::new(100.0, 0.0, 0.0));
    let s = PrincipalStresses::from(p);
    assert_relative_eq!(s.sigma_1, 100.0);
    assert_relative_eq!(s.sigma_2, 0.0);
    let v = evaluate(Criterion::VonMises, s, &MaterialLimit::yield_point(100.0).unwrap()).unwrap();
    assert!(v.failed);
}

fn stress() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

proptest! {
    #[test]
    fn failed_iff_factor_at_most_one(s1 in stress(), s2 in stress(), limit in 1.0..400.0f64) {
        for v in [tresca(s1, s2, limit), von_mises(s1, s2, limit), rankine(s1, s2, limit)] {
            if let Some(sf) = v.safety_factor.finite() {
                prop_assert_eq!(v.failed, sf <= 1.0);
            } else {
                prop_assert!(!v.failed);
            }
        }
    }

    #[test]
    fn tresca_is_never_below_von_mises(s1 in stress(), s2 in stress(), limit in 1.0..400.0f64) {
        // The Tresca hexagon is inscribed in the von Mises ellipse.
        let t = tresca(s1, s2, limit).governing;
        let m = von_mises(s1, s2, limit).governing;
        prop_assert!(t + 1e-9 >= m);
    }

    #[test]
    fn criteria_ignore_argument_order(s1 in stress(), s2 in stress()) {
        prop_assert_eq!(tresca(s1, s2, 100.0), tresca(s2, s1, 100.0));
        prop_assert_eq!(rankine(s1, s2, 100.0), rankine(s2, s1, 100.0));
        prop_assert_eq!(mohr(s1, s2, 200.0, 100.0).governing, mohr(s2, s1, 200.0, 100.0).governing);
    }
}
