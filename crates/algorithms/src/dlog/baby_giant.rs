//! Baby-step giant-step

use super::{search_space, Logarithm};
use crate::ec::ModularCurve;
use crate::error::{Error, Result};
use crate::scalar::mul_point;
use ecalg_api::{CurveAlgebra, Point};
use std::collections::HashMap;

const NAME: &str = "baby-step giant-step";

/// Meet in the middle with m = ⌊√n⌋ + 1.
///
/// The baby steps a·P for a in [0, m) go into a table; the giant steps
/// Q − b·m·P for b in [0, m) are looked up in it, and a hit gives
/// x = a + m·b. `steps` counts table entries plus giant steps taken.
pub fn baby_step_giant_step(
    curve: &ModularCurve,
    p: &Point<i64>,
    q: &Point<i64>,
) -> Result<Logarithm> {
    let n = search_space(curve, p, q, NAME)?;
    let m = (n as f64).sqrt() as u64 + 1;

    let mut baby_steps = HashMap::with_capacity(m as usize);
    let mut r = Point::Infinity;
    baby_steps.insert(r, 0u64);
    for a in 1..m {
        r = curve.add_points(&r, p)?;
        baby_steps.insert(r, a);
    }

    let giant = mul_point(curve, m as i64, &curve.neg_point(p))?;
    let mut r = *q;
    for b in 0..m {
        if let Some(&a) = baby_steps.get(&r) {
            return Ok(Logarithm {
                value: (a + m * b) % n,
                steps: m + b,
            });
        }
        r = curve.add_points(&r, &giant)?;
    }

    Err(Error::LogarithmNotFound { algorithm: NAME })
}
