//! Elliptic curve over the real numbers
//!
//! Besides the group law this curve knows its real roots (where it meets the
//! x-axis) and its stationary points (where the tangent is horizontal). Both
//! are needed to frame the plot and to snap user input onto the curve.

mod render;
mod snap;

use super::RenderConfig;
use crate::cubic;
use crate::error::{validate, Result};
use ecalg_api::{CurveAlgebra, PlotRange, Point, Sample, SeriesStyle};
use ecalg_params::plot::MAX_ROUND_EXP;

/// Coefficients of y² = x³ + ax + b over the reals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealParams {
    /// Coefficient of x
    pub a: f64,
    /// Constant term
    pub b: f64,
}

/// The curve y² = x³ + ax + b over the reals
#[derive(Debug, Clone, PartialEq)]
pub struct RealCurve {
    a: f64,
    b: f64,
    config: RenderConfig,
    roots: Vec<f64>,
    stationary: Vec<(f64, f64)>,
    singular: bool,
}

impl RealCurve {
    /// Build the curve with the default render configuration.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        Self::with_config(RealParams { a, b }, RenderConfig::default())
    }

    /// Build the curve with an explicit render configuration.
    pub fn with_config(params: RealParams, config: RenderConfig) -> Result<Self> {
        const CONTEXT: &str = "RealCurve";
        validate::finite(params.a, CONTEXT, "a")?;
        validate::finite(params.b, CONTEXT, "b")?;
        validate::parameter(config.resolution > 0, CONTEXT, "resolution must be positive")?;
        validate::finite(config.margin_factor, CONTEXT, "margin_factor")?;
        validate::parameter(
            config.margin_factor >= 0.0,
            CONTEXT,
            "margin_factor must not be negative",
        )?;
        validate::parameter(
            (-MAX_ROUND_EXP..=MAX_ROUND_EXP).contains(&config.round_exp),
            CONTEXT,
            "round_exp is out of range",
        )?;

        let RealParams { a, b } = params;
        let roots = cubic::real_roots(a, b);
        let stationary = stationary_points(a, b);
        let singular = 4.0 * a * a * a + 27.0 * b * b == 0.0;

        ecalg_common::trace!(
            "real curve a={} b={}: roots {:?}, {} stationary point(s), singular={}",
            a,
            b,
            roots,
            stationary.len(),
            singular
        );

        Ok(Self {
            a,
            b,
            config,
            roots,
            stationary,
            singular,
        })
    }

    /// Coefficient of x
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Constant term
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Render configuration in effect
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Ascending, duplicate-free x-axis crossings
    pub fn roots(&self) -> &[f64] {
        &self.roots
    }

    /// Points with a horizontal tangent, upper half only (y ≥ 0).
    ///
    /// Their mirror images below the x-axis are implied by symmetry.
    pub fn stationary_points(&self) -> &[(f64, f64)] {
        &self.stationary
    }

    /// The non-negative ordinate at `x`, or NaN when `x` is off the curve
    pub fn get_y(&self, x: f64) -> f64 {
        (x * (x * x + self.a) + self.b).sqrt()
    }

    /// Every abscissa whose ordinate is `±y`
    pub fn get_x(&self, y: f64) -> Vec<f64> {
        cubic::real_roots(self.a, self.b - y * y)
    }

    /// Non-negative ordinate at `x` with rounding noise near a root clamped
    fn upper_y(&self, x: f64) -> f64 {
        let y = self.get_y(x);
        if y.is_nan() {
            0.0
        } else {
            y
        }
    }

    /// Slope of the tangent at (x, y)
    fn tangent_slope(&self, x: f64, y: f64) -> f64 {
        (3.0 * x * x + self.a) / y / 2.0
    }
}

/// Stationary points (x, √(b − 2x³)) at x = ∓√(−a/3).
///
/// None when a > 0 or the left candidate has no real ordinate; one when
/// a = 0 or only the left candidate is real; two otherwise.
fn stationary_points(a: f64, b: f64) -> Vec<(f64, f64)> {
    let x0 = -(-a / 3.0).sqrt();
    let x1 = -x0;
    let y0 = (b - 2.0 * x0 * x0 * x0).sqrt();
    let y1 = (b - 2.0 * x1 * x1 * x1).sqrt();

    if x0.is_nan() || y0.is_nan() {
        Vec::new()
    } else if x0 == 0.0 || y1.is_nan() {
        vec![(x0, y0)]
    } else {
        vec![(x0, y0), (x1, y1)]
    }
}

impl CurveAlgebra for RealCurve {
    type Coord = f64;
    type Params = RealParams;

    fn name() -> &'static str {
        "reals"
    }

    fn from_params(params: RealParams) -> Result<Self> {
        Self::with_config(params, RenderConfig::default())
    }

    fn params(&self) -> RealParams {
        RealParams {
            a: self.a,
            b: self.b,
        }
    }

    fn add_points(&self, p: &Point<f64>, q: &Point<f64>) -> Result<Point<f64>> {
        let ((x1, y1), (x2, y2)) = match (p.coords(), q.coords()) {
            (None, _) => return Ok(*q),
            (_, None) => return Ok(*p),
            (Some(p), Some(q)) => (p, q),
        };

        let m = if x1 != x2 {
            (y1 - y2) / (x1 - x2)
        } else if y1 == 0.0 && y2 == 0.0 {
            // Vertical tangent at a root
            return Ok(Point::Infinity);
        } else if y1 == y2 {
            self.tangent_slope(x1, y1)
        } else {
            // Vertical secant through P and −P
            return Ok(Point::Infinity);
        };

        let x3 = m * m - x1 - x2;
        let y3 = m * (x1 - x3) - y1;
        Ok(Point::new(x3, y3))
    }

    fn neg_point(&self, p: &Point<f64>) -> Point<f64> {
        match *p {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => Point::new(x, -y),
        }
    }

    fn is_singular(&self) -> bool {
        self.singular
    }

    fn plot_range(&self, extra: &[Point<f64>]) -> PlotRange {
        self.framing_range(extra)
    }

    fn curve_samples(&self, range: &PlotRange) -> Vec<Sample> {
        self.sample_curve(range)
    }

    fn curve_style(&self) -> SeriesStyle {
        SeriesStyle::Lines
    }

    fn line_samples(
        &self,
        p: &Point<f64>,
        q: &Point<f64>,
        range: &PlotRange,
    ) -> Result<Vec<Sample>> {
        Ok(self.sample_line(p, q, range))
    }

    fn fix_point_coordinate(&self, prev: (f64, f64), requested: (f64, f64)) -> (f64, f64) {
        self.snap(prev, requested)
    }
}
