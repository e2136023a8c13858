//! Property-based tests for real root extraction

use ecalg::algorithms::cubic::{delta, real_roots};
use proptest::prelude::*;

fn residual(a: f64, b: f64, x: f64) -> f64 {
    x * x * x + a * x + b
}

proptest! {
    #[test]
    fn one_real_root_when_delta_positive(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        prop_assume!(delta(a, b) > 0.0);
        let roots = real_roots(a, b);
        prop_assert_eq!(roots.len(), 1);
        prop_assert!(residual(a, b, roots[0]).abs() < 1e-9);
    }

    #[test]
    fn three_real_roots_when_delta_negative(a in -10.0f64..0.0, b in -10.0f64..10.0) {
        prop_assume!(delta(a, b) < -1e-6);
        let roots = real_roots(a, b);
        prop_assert_eq!(roots.len(), 3);
        prop_assert!(roots[0] < roots[1] && roots[1] < roots[2]);
        for x in roots {
            prop_assert!(residual(a, b, x).abs() < 1e-9);
        }
    }

    #[test]
    fn ordinate_inversion_recovers_abscissa(a in -5.0f64..5.0, b in -5.0f64..5.0, offset in 0.1f64..3.0) {
        let roots = real_roots(a, b);
        let x = roots[roots.len() - 1] + offset;
        let y2 = residual(a, b, x);
        let candidates = real_roots(a, b - y2);
        prop_assert!(candidates.iter().any(|c| (c - x).abs() < 1e-5));
    }
}
