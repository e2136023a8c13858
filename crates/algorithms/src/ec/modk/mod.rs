//! Elliptic curve over the integers modulo k
//!
//! The curve is the finite set of pairs (x, y) in [0, k)² satisfying the
//! equation, plus the point at infinity. It is enumerated exhaustively, so
//! every operation assumes a small modulus.
//!
//! The modulus may be composite. Slopes are then computed with an inverse
//! that may not exist, which the group law reports as
//! [`Error::UndefinedInverse`]; [`ModularCurve::is_prime`] lets a caller warn
//! about this regime up front.

mod render;
mod snap;

use crate::error::{validate, Error, Result};
use ecalg_api::{CurveAlgebra, PlotRange, Point, Sample, SeriesStyle};
use ecalg_common::{inverse_of, is_prime, modulo};
use ecalg_params::plot::CURVE_POINT_RADIUS;

/// Coefficients and modulus of y² = x³ + ax + b (mod k)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModularParams {
    /// Coefficient of x
    pub a: i64,
    /// Constant term
    pub b: i64,
    /// Modulus, at least 1
    pub k: i64,
}

impl ModularParams {
    /// Build a parameter record from raw numeric input.
    ///
    /// Every value must be a finite integer, and `k` must be at least 1.
    pub fn from_f64(a: f64, b: f64, k: f64) -> Result<Self> {
        const CONTEXT: &str = "ModularParams";
        let params = Self {
            a: validate::integral(a, CONTEXT, "a")?,
            b: validate::integral(b, CONTEXT, "b")?,
            k: validate::integral(k, CONTEXT, "k")?,
        };
        validate::modulus(params.k, CONTEXT)?;
        Ok(params)
    }
}

/// The curve y² = x³ + ax + b over the integers modulo k
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularCurve {
    a: i64,
    b: i64,
    k: i64,
    points: Vec<(i64, i64)>,
    prime: bool,
    singular: bool,
}

impl ModularCurve {
    /// Build the curve and enumerate its points.
    pub fn new(a: i64, b: i64, k: i64) -> Result<Self> {
        validate::modulus(k, "ModularCurve")?;

        let mut curve = Self {
            a,
            b,
            k,
            points: Vec::new(),
            prime: is_prime(k),
            singular: false,
        };
        curve.singular = curve.discriminant() == 0;
        curve.points = curve.enumerate();

        ecalg_common::trace!(
            "modular curve a={} b={} k={}: {} finite point(s), prime={}, singular={}",
            a,
            b,
            k,
            curve.points.len(),
            curve.prime,
            curve.singular
        );

        Ok(curve)
    }

    /// Coefficient of x
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Constant term
    pub fn b(&self) -> i64 {
        self.b
    }

    /// The modulus k
    pub fn k(&self) -> i64 {
        self.k
    }

    /// Finite points in x-major, then y, order
    pub fn points(&self) -> &[(i64, i64)] {
        &self.points
    }

    /// Is the modulus prime?
    ///
    /// A composite modulus does not stop any computation, but slopes may
    /// have no inverse and subgroup orders are not reported.
    pub fn is_prime(&self) -> bool {
        self.prime
    }

    /// Number of residues, k
    pub fn field_order(&self) -> i64 {
        self.k
    }

    /// Number of curve points, the point at infinity included
    pub fn curve_order(&self) -> u64 {
        self.points.len() as u64 + 1
    }

    /// Does (x, y) lie in [0, k)² and satisfy the curve equation?
    pub fn has_point(&self, x: i64, y: i64) -> bool {
        (0..self.k).contains(&x) && (0..self.k).contains(&y) && self.rhs(x) == self.square(y)
    }

    /// Is `p` a point of the curve? The point at infinity always is.
    pub fn contains(&self, p: &Point<i64>) -> bool {
        match p.coords() {
            None => true,
            Some((x, y)) => self.has_point(x, y),
        }
    }

    /// Ordinates of the curve points with abscissa `x`
    pub fn get_y(&self, x: i64) -> Vec<i64> {
        self.points
            .iter()
            .filter(|&&(px, _)| px == x)
            .map(|&(_, py)| py)
            .collect()
    }

    /// Abscissae of the curve points with ordinate `y`
    pub fn get_x(&self, y: i64) -> Vec<i64> {
        self.points
            .iter()
            .filter(|&&(_, py)| py == y)
            .map(|&(px, _)| px)
            .collect()
    }

    /// Size of the cyclic subgroup generated by `p`.
    ///
    /// Counts additions of `p` until the running sum returns to the point at
    /// infinity. Returns 0 on a singular curve or a composite modulus, where
    /// the count is meaningless, and 1 for the point at infinity. Fails when
    /// `p` is not on the curve, and with `UndefinedInverse` when a doubling
    /// along the way needs the inverse of 2y and k = 2.
    pub fn subgroup_order(&self, p: &Point<i64>) -> Result<u64> {
        if !self.contains(p) {
            return Err(Error::param(
                "ModularCurve::subgroup_order",
                format!("{} is not on the curve", p),
            ));
        }
        if p.is_infinity() {
            return Ok(1);
        }
        if self.singular || !self.prime {
            return Ok(0);
        }

        let limit = self.curve_order();
        let mut n = 2u64;
        let mut q = self.add_points(p, p)?;
        while !q.is_infinity() {
            if n >= limit {
                return Err(Error::param(
                    "ModularCurve::subgroup_order",
                    format!("{} did not return to infinity within {} additions", p, limit),
                ));
            }
            q = self.add_points(p, &q)?;
            n += 1;
        }

        ecalg_common::trace!("subgroup order of {} modulo {}: {}", p, self.k, n);
        Ok(n)
    }

    /// Inverse of `n` modulo k, or the failure the group law reports
    fn inverse(&self, n: i128) -> Result<i64> {
        let value = modulo(n, self.k);
        inverse_of(value, self.k).ok_or(Error::UndefinedInverse {
            value,
            modulus: self.k,
        })
    }

    /// (4a³ + 27b²) mod k
    fn discriminant(&self) -> i64 {
        let k = self.k;
        let a = modulo(self.a as i128, k) as i128;
        let b = modulo(self.b as i128, k) as i128;
        let a3 = modulo(modulo(a * a, k) as i128 * a, k) as i128;
        let b2 = modulo(b * b, k) as i128;
        modulo(4 * a3 + 27 * b2, k)
    }

    /// (x³ + ax + b) mod k
    fn rhs(&self, x: i64) -> i64 {
        let k = self.k;
        let x = modulo(x as i128, k) as i128;
        let x3 = modulo(modulo(x * x, k) as i128 * x, k) as i128;
        let ax = modulo(modulo(self.a as i128, k) as i128 * x, k) as i128;
        modulo(x3 + ax + self.b as i128, k)
    }

    /// y² mod k
    fn square(&self, y: i64) -> i64 {
        let y = y as i128;
        modulo(y * y, self.k)
    }

    fn enumerate(&self) -> Vec<(i64, i64)> {
        let mut points = Vec::new();
        for x in 0..self.k {
            let rhs = self.rhs(x);
            for y in 0..self.k {
                if self.square(y) == rhs {
                    points.push((x, y));
                }
            }
        }
        points
    }
}

impl CurveAlgebra for ModularCurve {
    type Coord = i64;
    type Params = ModularParams;

    fn name() -> &'static str {
        "modk"
    }

    fn from_params(params: ModularParams) -> Result<Self> {
        Self::new(params.a, params.b, params.k)
    }

    fn params(&self) -> ModularParams {
        ModularParams {
            a: self.a,
            b: self.b,
            k: self.k,
        }
    }

    fn add_points(&self, p: &Point<i64>, q: &Point<i64>) -> Result<Point<i64>> {
        let ((x1, y1), (x2, y2)) = match (p.coords(), q.coords()) {
            (None, _) => return Ok(*q),
            (_, None) => return Ok(*p),
            (Some(p), Some(q)) => (p, q),
        };
        let (x1, y1, x2, y2) = (x1 as i128, y1 as i128, x2 as i128, y2 as i128);

        let m = if x1 != x2 {
            (y1 - y2) * self.inverse(x1 - x2)? as i128
        } else if y1 == 0 && y2 == 0 {
            // Vertical tangent
            return Ok(Point::Infinity);
        } else if y1 == y2 {
            (3 * x1 * x1 + self.a as i128) * self.inverse(2 * y1)? as i128
        } else {
            // Vertical secant through P and −P
            return Ok(Point::Infinity);
        };
        let m = modulo(m, self.k) as i128;

        let x3 = modulo(m * m - x1 - x2, self.k);
        let y3 = modulo(m * (x1 - x3 as i128) - y1, self.k);
        Ok(Point::new(x3, y3))
    }

    fn neg_point(&self, p: &Point<i64>) -> Point<i64> {
        match *p {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => Point::new(x, modulo(self.k as i128 - y as i128, self.k)),
        }
    }

    fn is_singular(&self) -> bool {
        self.singular
    }

    fn plot_range(&self, extra: &[Point<i64>]) -> PlotRange {
        self.framing_range(extra)
    }

    fn curve_samples(&self, _range: &PlotRange) -> Vec<Sample> {
        self.points
            .iter()
            .map(|&(x, y)| Sample::At(x as f64, y as f64))
            .collect()
    }

    fn curve_style(&self) -> SeriesStyle {
        SeriesStyle::Points {
            radius: CURVE_POINT_RADIUS,
        }
    }

    fn line_samples(
        &self,
        p: &Point<i64>,
        q: &Point<i64>,
        range: &PlotRange,
    ) -> Result<Vec<Sample>> {
        self.sample_line(p, q, range)
    }

    fn fix_point_coordinate(&self, prev: (i64, i64), requested: (i64, i64)) -> (i64, i64) {
        self.snap(prev, requested)
    }
}
