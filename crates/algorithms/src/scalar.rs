//! Scalar multiplication by double-and-add
//!
//! Written once for every [`CurveAlgebra`]; only the group law and negation
//! are needed. The running time is not constant: the bit pattern of `n`
//! decides which additions happen.

use crate::error::Result;
use ecalg_api::{CurveAlgebra, Point};

/// n·P, with (−n)·P = n·(−P) and 0·P the point at infinity.
///
/// Bits of `|n|` are consumed from the least significant end: the base is
/// added into the accumulator when the bit is set, then doubled. The
/// doubling after the most significant bit is skipped.
pub fn mul_point<C: CurveAlgebra>(
    curve: &C,
    n: i64,
    p: &Point<C::Coord>,
) -> Result<Point<C::Coord>> {
    if n == 0 || p.is_infinity() {
        return Ok(Point::Infinity);
    }

    let mut base = if n < 0 { curve.neg_point(p) } else { *p };
    let mut bits = n.unsigned_abs();
    let mut acc = Point::Infinity;

    loop {
        if bits & 1 == 1 {
            acc = curve.add_points(&base, &acc)?;
        }
        bits >>= 1;
        if bits == 0 {
            break;
        }
        base = curve.add_points(&base, &base)?;
    }

    Ok(acc)
}
