//! Curves and points with known properties

use ecalg::prelude::*;

/// y² = x³ + 1 (mod 7): prime, non-singular, 11 finite points, order 12
pub fn small_modular_curve() -> ModularCurve {
    ModularCurve::new(0, 1, 7).expect("valid parameters")
}

/// y² = x³ + 2x + 3 (mod 97): 99 finite points, order 100, (3, 6) generates a subgroup of 5
pub fn dlog_curve() -> (ModularCurve, Point<i64>) {
    let curve = ModularCurve::new(2, 3, 97).expect("valid parameters");
    (curve, Point::new(3, 6))
}

/// y² = x³ − 7x + 10, through (1, 2), (3, 4) and (−1, 4)
pub fn real_curve() -> RealCurve {
    RealCurve::new(-7.0, 10.0).expect("valid parameters")
}

/// Every finite point of a modular curve
pub fn finite_points(curve: &ModularCurve) -> Vec<Point<i64>> {
    curve
        .points()
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect()
}

/// Do two real points agree within `tolerance`, relative to their size?
pub fn approx_eq(p: &Point<f64>, q: &Point<f64>, tolerance: f64) -> bool {
    match (p.coords(), q.coords()) {
        (None, None) => true,
        (Some((px, py)), Some((qx, qy))) => {
            let scale = 1.0f64.max(px.abs()).max(py.abs());
            (px - qx).abs() <= tolerance * scale && (py - qy).abs() <= tolerance * scale
        }
        _ => false,
    }
}
