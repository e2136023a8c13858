//! Real roots of the depressed cubic x³ + ax + b = 0
//!
//! With q = a/3, r = −b/2 and δ = q³ + r², the sign of δ selects the
//! formula:
//! - δ > 0: one real root, by Cardano's formula with real cube roots;
//! - δ < 0: three real roots, by the trigonometric form;
//! - δ = 0: a repeated root, 2·∛r and −∛r (equal when r = 0).
//!
//! The result is ascending with exact duplicates removed. The same solver
//! inverts y to x on the real curve by solving x³ + ax + (b − y²) = 0.

use core::f64::consts::PI;
use ecalg_common::sort_unique;

/// Which formula the discriminant selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubicKind {
    /// δ > 0
    OneReal,
    /// δ < 0
    ThreeReal,
    /// δ = 0
    Repeated,
}

/// δ = (a/3)³ + (b/2)²
#[inline]
pub fn delta(a: f64, b: f64) -> f64 {
    let q = a / 3.0;
    let r = -b / 2.0;
    q * q * q + r * r
}

/// Classify x³ + ax + b by the sign of δ
pub fn classify(a: f64, b: f64) -> CubicKind {
    let d = delta(a, b);
    if d > 0.0 {
        CubicKind::OneReal
    } else if d < 0.0 {
        CubicKind::ThreeReal
    } else {
        CubicKind::Repeated
    }
}

/// Ascending, duplicate-free real roots of x³ + ax + b = 0
pub fn real_roots(a: f64, b: f64) -> Vec<f64> {
    let q = a / 3.0;
    let r = -b / 2.0;
    let d = q * q * q + r * r;

    let roots = match classify(a, b) {
        CubicKind::OneReal => {
            let s = (r + d.sqrt()).cbrt();
            let t = (r - d.sqrt()).cbrt();
            vec![s + t]
        }
        CubicKind::ThreeReal => {
            // q < 0 here; rounding can push the ratio just outside [-1, 1]
            let ratio = (r / (-q * q * q).sqrt()).clamp(-1.0, 1.0);
            let s = ratio.acos();
            let t = 2.0 * (-q).sqrt();
            vec![
                t * (s / 3.0).cos(),
                t * ((s + 2.0 * PI) / 3.0).cos(),
                t * ((s + 4.0 * PI) / 3.0).cos(),
            ]
        }
        CubicKind::Repeated => vec![2.0 * r.cbrt(), -r.cbrt()],
    };

    sort_unique(roots)
}
