//! Cross-crate tests through the facade

use ecalg::prelude::*;
use ecalg_tests::fixtures::{dlog_curve, finite_points, real_curve, small_modular_curve};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_modular_arithmetic() {
    assert!(is_prime(2));
    assert!(is_prime(7));
    assert!(!is_prime(1));
    assert!(!is_prime(9));

    assert_eq!(inverse_of(3, 7), Some(5));
    assert_eq!(inverse_of(2, 4), None);
}

#[test]
fn test_lagrange_on_small_curve() {
    let curve = small_modular_curve();
    assert_eq!(curve.points().len(), 11);
    assert_eq!(curve.curve_order(), 12);

    for p in finite_points(&curve) {
        let n = curve.subgroup_order(&p).unwrap();
        assert_eq!(12 % n, 0, "order {} of {} does not divide 12", n, p);
        assert!(mul_point(&curve, n as i64, &p).unwrap().is_infinity());
        for m in 1..n {
            assert!(!mul_point(&curve, m as i64, &p).unwrap().is_infinity());
        }
    }
}

#[test]
fn test_line_wrap_slope_two_modulo_five() {
    let curve = ModularCurve::new(1, 1, 5).unwrap();
    let p = Point::new(0, 0);
    let q = Point::new(1, 2);
    let range = curve.plot_range(&[p, q]);
    let samples = curve.line_samples(&p, &q, &range).unwrap();

    // Slope 2 climbs 8 over the plot width [0, 4]: one wrap
    let breaks = samples.iter().filter(|s| s.is_break()).count();
    assert_eq!(breaks, 1);
    assert_eq!(samples.len(), 5);

    for s in samples.iter().filter_map(Sample::xy) {
        assert!((0.0..=5.0).contains(&s.1));
    }
    let (_, first_y) = samples[0].xy().unwrap();
    let (_, last_y) = samples[samples.len() - 1].xy().unwrap();
    assert!((0.0..5.0).contains(&first_y));
    assert!((0.0..5.0).contains(&last_y));
}

#[test]
fn test_wrapped_segments_meet_opposite_edges() {
    let curve = ModularCurve::new(2, 3, 11).unwrap();
    let range = curve.plot_range(&[]);
    let k = 11.0;
    let points = finite_points(&curve);

    for p in &points {
        for q in &points {
            let samples = curve.line_samples(p, q, &range).unwrap();
            for (i, s) in samples.iter().enumerate() {
                if !s.is_break() {
                    let (_, y) = s.xy().unwrap();
                    assert!((0.0..=k).contains(&y), "{} outside the grid", y);
                    continue;
                }
                let (exit_x, exit_y) = samples[i - 1].xy().unwrap();
                let (entry_x, entry_y) = samples[i + 1].xy().unwrap();
                assert_eq!(exit_x, entry_x);
                assert_eq!(exit_y + entry_y, k);
                assert!(exit_y == 0.0 || exit_y == k);
            }
        }
    }
}

#[test]
fn test_snap_is_idempotent() {
    let curve = small_modular_curve();
    for p in finite_points(&curve) {
        let xy = p.coords().unwrap();
        assert_eq!(curve.fix_point_coordinate(xy, xy), xy);
    }

    let curve = real_curve();
    for xy in [(1.0, 2.0), (3.0, 4.0), (-1.0, 4.0), (3.0, -4.0)] {
        assert_eq!(curve.fix_point_coordinate(xy, xy), xy);
    }
}

#[test]
fn test_snapped_points_are_on_curve() {
    let curve = small_modular_curve();
    for x in 0..7 {
        for y in 0..7 {
            let (sx, sy) = curve.fix_point_coordinate((0, 1), (x, y));
            assert!(curve.has_point(sx, sy));
        }
    }

    let curve = real_curve();
    for x in [-4.0, -2.5, 0.0, 1.7, 6.0] {
        let (sx, sy) = curve.fix_point_coordinate((1.0, 2.0), (x, 1.0));
        let rhs = sx * sx * sx + curve.a() * sx + curve.b();
        assert!(
            (sy * sy - rhs).abs() < 1e-3 * rhs.abs().max(1.0),
            "({}, {}) is off the curve",
            sx,
            sy
        );
    }
}

#[test]
fn test_session_keeps_last_valid_curve() {
    let mut session = CurveSession::<RealCurve>::new(RealParams { a: -7.0, b: 10.0 }).unwrap();
    let before = session.curve_samples();

    let err = session
        .set_parameters(RealParams {
            a: f64::INFINITY,
            b: 0.0,
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
    assert_eq!(session.curve_samples(), before);

    let raw = ModularParams::from_f64(2.0, 3.0, 97.0).unwrap();
    let mut modular = CurveSession::<ModularCurve>::new(raw).unwrap();
    assert!(modular
        .set_parameters(ModularParams { a: 2, b: 3, k: -1 })
        .is_err());
    assert_eq!(modular.curve().curve_order(), 100);
}

#[test]
fn test_views_through_facade() {
    let curve = real_curve();
    let addition = PointAddition::new(&curve, Point::new(1.0, 2.0), Point::new(3.0, 4.0)).unwrap();
    assert_eq!(addition.result(), Point::new(-3.0, 2.0));
    let data = addition.plot_data().unwrap();
    assert_eq!(data.series[0].role, SeriesRole::Curve);
    assert_eq!(data.labels.len(), 3);

    let (curve, p) = dlog_curve();
    let multiplication = ScalarMultiplication::new(&curve, 5, p).unwrap();
    assert!(multiplication.result().is_infinity());
    assert_eq!(multiplication.subgroup_order().unwrap(), 5);
}

#[test]
fn test_logarithm_solvers_agree() {
    let (curve, p) = dlog_curve();
    let q = mul_point(&curve, 3, &p).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    assert_eq!(brute_force(&curve, &p, &q, &mut rng).unwrap().value, 3);
    assert_eq!(baby_step_giant_step(&curve, &p, &q).unwrap().value, 3);

    let rho = (0..10u64)
        .map(|seed| pollard_rho(&curve, &p, &q, &mut ChaCha8Rng::seed_from_u64(seed)))
        .find_map(|result| result.ok())
        .expect("some seed finds the logarithm");
    assert_eq!(rho.value, 3);
}
