//! Pollard's rho with Floyd cycle detection

use super::{search_space, Logarithm};
use crate::ec::ModularCurve;
use crate::error::{Error, Result};
use crate::scalar::mul_point;
use ecalg_api::{CurveAlgebra, Point};
use ecalg_common::{inverse_of, modulo};
use ecalg_params::dlog::{RHO_MAX_ATTEMPTS, RHO_PARTITIONS};
use rand::Rng;

const NAME: &str = "pollard-rho";

/// A point of the walk, X = a·P + b·Q
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WalkState {
    x: Point<i64>,
    a: u64,
    b: u64,
}

impl WalkState {
    fn origin() -> Self {
        Self {
            x: Point::Infinity,
            a: 0,
            b: 0,
        }
    }
}

/// A pseudo-random walk through the subgroup.
///
/// The plane is cut into vertical strips by abscissa. The first strip (and
/// the point at infinity) adds a fixed random combination of P and Q, the
/// middle one doubles, the last adds a second combination. Coefficients are
/// tracked modulo n.
struct RhoWalk<'a> {
    curve: &'a ModularCurve,
    n: u64,
    strip_width: i64,
    first: WalkState,
    second: WalkState,
}

impl<'a> RhoWalk<'a> {
    fn new<R: Rng + ?Sized>(
        curve: &'a ModularCurve,
        p: &Point<i64>,
        q: &Point<i64>,
        n: u64,
        rng: &mut R,
    ) -> Result<Self> {
        let first = combination(curve, p, q, n, rng)?;
        let second = combination(curve, p, q, n, rng)?;

        Ok(Self {
            curve,
            n,
            strip_width: curve.k() / RHO_PARTITIONS + 1,
            first,
            second,
        })
    }

    fn step(&self, state: &mut WalkState) -> Result<()> {
        let strip = match state.x.coords() {
            None => 0,
            Some((x, _)) => x / self.strip_width,
        };

        let (x, a, b) = match strip {
            0 => (
                self.curve.add_points(&state.x, &self.first.x)?,
                state.a + self.first.a,
                state.b + self.first.b,
            ),
            1 => (
                self.curve.add_points(&state.x, &state.x)?,
                state.a * 2,
                state.b * 2,
            ),
            _ => (
                self.curve.add_points(&state.x, &self.second.x)?,
                state.a + self.second.a,
                state.b + self.second.b,
            ),
        };

        *state = WalkState {
            x,
            a: a % self.n,
            b: b % self.n,
        };
        Ok(())
    }
}

/// A random a·P + b·Q with a, b in [1, n)
fn combination<R: Rng + ?Sized>(
    curve: &ModularCurve,
    p: &Point<i64>,
    q: &Point<i64>,
    n: u64,
    rng: &mut R,
) -> Result<WalkState> {
    let a = rng.gen_range(1..n);
    let b = rng.gen_range(1..n);
    let x = curve.add_points(
        &mul_point(curve, a as i64, p)?,
        &mul_point(curve, b as i64, q)?,
    )?;
    Ok(WalkState { x, a, b })
}

/// Find a collision a₁P + b₁Q = a₂P + b₂Q and solve for x.
///
/// The tortoise takes one step of the walk and the hare two, for at most n
/// rounds. A collision with b₁ = b₂, or whose b₂ − b₁ has no inverse modulo
/// n, or whose answer does not check out, restarts the walk with fresh
/// coefficients, a bounded number of times. `steps` is `i·n + j + 1` for
/// round j of attempt i.
pub fn pollard_rho<R: Rng + ?Sized>(
    curve: &ModularCurve,
    p: &Point<i64>,
    q: &Point<i64>,
    rng: &mut R,
) -> Result<Logarithm> {
    let n = search_space(curve, p, q, NAME)?;
    if n < 2 {
        return Err(Error::LogarithmNotFound { algorithm: NAME });
    }

    for attempt in 0..RHO_MAX_ATTEMPTS {
        let walk = RhoWalk::new(curve, p, q, n, rng)?;
        let mut tortoise = WalkState::origin();
        let mut hare = WalkState::origin();

        for j in 0..n {
            walk.step(&mut tortoise)?;
            walk.step(&mut hare)?;
            walk.step(&mut hare)?;

            if tortoise.x != hare.x {
                continue;
            }
            if tortoise.b == hare.b {
                break;
            }

            let modulus = n as i64;
            let denominator = modulo(hare.b as i128 - tortoise.b as i128, modulus);
            let inverse = match inverse_of(denominator, modulus) {
                Some(inverse) => inverse,
                None => break,
            };
            let value = modulo(
                (tortoise.a as i128 - hare.a as i128) * inverse as i128,
                modulus,
            ) as u64;

            if mul_point(curve, value as i64, p)? == *q {
                return Ok(Logarithm {
                    value,
                    steps: attempt * n + j + 1,
                });
            }
            break;
        }

        ecalg_common::trace!("{}: attempt {} found no usable collision", NAME, attempt + 1);
    }

    Err(Error::LogarithmNotFound { algorithm: NAME })
}
