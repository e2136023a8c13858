//! Exhaustive search

use super::{search_space, Logarithm};
use crate::ec::ModularCurve;
use crate::error::{Error, Result};
use crate::scalar::mul_point;
use ecalg_api::{CurveAlgebra, Point};
use rand::Rng;

const NAME: &str = "brute-force";

/// Walk s·P, (s + 1)·P, ... from a random s until Q is met.
///
/// `steps` counts the points compared.
pub fn brute_force<R: Rng + ?Sized>(
    curve: &ModularCurve,
    p: &Point<i64>,
    q: &Point<i64>,
    rng: &mut R,
) -> Result<Logarithm> {
    let n = search_space(curve, p, q, NAME)?;

    let start = rng.gen_range(0..n);
    let mut r = mul_point(curve, start as i64, p)?;

    for x in 0..n {
        if r == *q {
            return Ok(Logarithm {
                value: (start + x) % n,
                steps: x + 1,
            });
        }
        r = curve.add_points(&r, p)?;
    }

    Err(Error::LogarithmNotFound { algorithm: NAME })
}
