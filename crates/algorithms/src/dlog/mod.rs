//! Discrete logarithms on small modular curves
//!
//! Given points P and Q of a curve with a prime modulus, find x with
//! x·P = Q. The search space is the cyclic subgroup generated by P, whose
//! order n is counted first. Three classic solvers are provided, from the
//! exhaustive walk to the Pollard rho random walk; each reports how many
//! group operations it needed so their costs can be compared.

mod baby_giant;
mod brute_force;
mod pollard_rho;

pub use baby_giant::baby_step_giant_step;
pub use brute_force::brute_force;
pub use pollard_rho::pollard_rho;

use crate::ec::ModularCurve;
use crate::error::{Error, Result};
use ecalg_api::Point;

/// A solved logarithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logarithm {
    /// x in [0, n) with x·P = Q
    pub value: u64,
    /// Work done, in solver-specific steps
    pub steps: u64,
}

/// Order of the subgroup P generates, after checking both operands.
fn search_space(
    curve: &ModularCurve,
    p: &Point<i64>,
    q: &Point<i64>,
    algorithm: &'static str,
) -> Result<u64> {
    if p.is_infinity() {
        return Err(Error::param(algorithm, "base point must be finite"));
    }
    for point in [p, q] {
        if !curve.contains(point) {
            return Err(Error::param(algorithm, format!("{} is not on the curve", point)));
        }
    }

    match curve.subgroup_order(p)? {
        0 => Err(Error::param(
            algorithm,
            "a prime modulus and a non-singular curve are required",
        )),
        n => Ok(n),
    }
}
