//! Proptest strategies for curves and their points

use ecalg::prelude::*;
use proptest::prelude::*;

/// Small odd primes; characteristic 2 and 3 are excluded
pub const PRIMES: [i64; 12] = [5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 43, 97];

/// A non-singular modular curve over a prime modulus with at least one
/// finite point
pub fn modular_curve() -> impl Strategy<Value = ModularCurve> {
    (prop::sample::select(PRIMES.to_vec()), 0i64..97, 0i64..97)
        .prop_map(|(k, a, b)| ModularCurve::new(a % k, b % k, k).expect("prime modulus"))
        .prop_filter("singular or empty curve", |curve| {
            !curve.is_singular() && !curve.points().is_empty()
        })
}

/// A curve together with three of its finite points, chosen by index
pub fn modular_curve_with_points() -> impl Strategy<Value = (ModularCurve, [Point<i64>; 3])> {
    (modular_curve(), any::<[prop::sample::Index; 3]>()).prop_map(|(curve, picks)| {
        let pick = |i: &prop::sample::Index| {
            let (x, y) = curve.points()[i.index(curve.points().len())];
            Point::new(x, y)
        };
        let points = [pick(&picks[0]), pick(&picks[1]), pick(&picks[2])];
        (curve, points)
    })
}

/// A real curve and three points on its unbounded branch, well apart
pub fn real_curve_with_points() -> impl Strategy<Value = (RealCurve, [Point<f64>; 3])> {
    (
        -5.0f64..5.0,
        -5.0f64..5.0,
        (0.5f64..1.5, 2.0f64..3.0, 3.5f64..4.5),
        any::<[bool; 3]>(),
    )
        .prop_map(|(a, b, (o1, o2, o3), signs)| {
            let curve = RealCurve::new(a, b).expect("finite coefficients");
            let right = *curve.roots().last().expect("a cubic has a real root");
            let at = |offset: f64, upper: bool| {
                let x = right + offset;
                let y = curve.get_y(x);
                Point::new(x, if upper { y } else { -y })
            };
            let points = [at(o1, signs[0]), at(o2, signs[1]), at(o3, signs[2])];
            (curve, points)
        })
}
