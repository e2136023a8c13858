//! Composed views over one curve
//!
//! A view borrows a curve, holds its operands and result, and turns them
//! into [`PlotData`] for a front-end. Views are rebuilt whenever the curve
//! or an operand changes.

use crate::ec::ModularCurve;
use crate::error::Result;
use crate::scalar::mul_point;
use ecalg_api::{
    CurveAlgebra, Label, PlotData, PlotRange, Point, Sample, Series, SeriesRole, SeriesStyle,
};
use ecalg_params::plot::MARKER_RADIUS;

/// R = P + Q on a curve
#[derive(Debug)]
pub struct PointAddition<'a, C: CurveAlgebra> {
    curve: &'a C,
    p: Point<C::Coord>,
    q: Point<C::Coord>,
    r: Point<C::Coord>,
}

impl<'a, C: CurveAlgebra> PointAddition<'a, C> {
    /// Add `p` and `q` on `curve`.
    pub fn new(curve: &'a C, p: Point<C::Coord>, q: Point<C::Coord>) -> Result<Self> {
        let r = curve.add_points(&p, &q)?;
        Ok(Self { curve, p, q, r })
    }

    /// First operand
    pub fn p(&self) -> Point<C::Coord> {
        self.p
    }

    /// Second operand
    pub fn q(&self) -> Point<C::Coord> {
        self.q
    }

    /// The sum R
    pub fn result(&self) -> Point<C::Coord> {
        self.r
    }

    /// Range showing the curve, both operands, R and its mirror −R
    pub fn plot_range(&self) -> PlotRange {
        let mut points = vec![self.p, self.q];
        if !self.r.is_infinity() {
            points.push(self.r);
            points.push(self.curve.neg_point(&self.r));
        }
        self.curve.plot_range(&points)
    }

    /// The curve, the R/−R connector and R marker, the P–Q line and the
    /// operand markers, in drawing order.
    pub fn plot_data(&self) -> Result<PlotData> {
        let range = self.plot_range();
        let mut series = vec![curve_series(self.curve, &range)];

        if !self.r.is_infinity() {
            series.push(Series {
                role: SeriesRole::ResultMirror,
                style: SeriesStyle::Lines,
                samples: markers(&[self.r, self.curve.neg_point(&self.r)]),
            });
            series.push(marker_series(SeriesRole::Result, &[self.r]));
        }

        series.push(Series {
            role: SeriesRole::Line,
            style: SeriesStyle::Lines,
            samples: self.curve.line_samples(&self.p, &self.q, &range)?,
        });
        series.push(marker_series(SeriesRole::Operands, &[self.p, self.q]));

        Ok(PlotData {
            range,
            series,
            labels: vec![label("P", &self.p), label("Q", &self.q), label("R", &self.r)],
        })
    }
}

/// Q = n·P on a curve
#[derive(Debug)]
pub struct ScalarMultiplication<'a, C: CurveAlgebra> {
    curve: &'a C,
    n: i64,
    p: Point<C::Coord>,
    q: Point<C::Coord>,
}

impl<'a, C: CurveAlgebra> ScalarMultiplication<'a, C> {
    /// Multiply `p` by `n` on `curve`.
    pub fn new(curve: &'a C, n: i64, p: Point<C::Coord>) -> Result<Self> {
        let q = mul_point(curve, n, &p)?;
        Ok(Self { curve, n, p, q })
    }

    /// The scalar
    pub fn n(&self) -> i64 {
        self.n
    }

    /// The base point
    pub fn p(&self) -> Point<C::Coord> {
        self.p
    }

    /// The product Q
    pub fn result(&self) -> Point<C::Coord> {
        self.q
    }

    /// Range showing the curve, P and Q
    pub fn plot_range(&self) -> PlotRange {
        self.curve.plot_range(&[self.p, self.q])
    }

    /// The curve, the P marker and the Q marker.
    pub fn plot_data(&self) -> PlotData {
        let range = self.plot_range();
        let mut series = vec![
            curve_series(self.curve, &range),
            marker_series(SeriesRole::Operands, &[self.p]),
        ];
        if !self.q.is_infinity() {
            series.push(marker_series(SeriesRole::Result, &[self.q]));
        }

        PlotData {
            range,
            series,
            labels: vec![label("P", &self.p), label("Q", &self.q)],
        }
    }
}

impl ScalarMultiplication<'_, ModularCurve> {
    /// Order of the subgroup P generates; 0 when the curve cannot tell.
    pub fn subgroup_order(&self) -> Result<u64> {
        self.curve.subgroup_order(&self.p)
    }
}

fn curve_series<C: CurveAlgebra>(curve: &C, range: &PlotRange) -> Series {
    Series {
        role: SeriesRole::Curve,
        style: curve.curve_style(),
        samples: curve.curve_samples(range),
    }
}

fn marker_series<T: ecalg_api::Coordinate>(role: SeriesRole, points: &[Point<T>]) -> Series {
    Series {
        role,
        style: SeriesStyle::Points {
            radius: MARKER_RADIUS,
        },
        samples: markers(points),
    }
}

/// Finite points as vertices; the point at infinity has no place on the plot
fn markers<T: ecalg_api::Coordinate>(points: &[Point<T>]) -> Vec<Sample> {
    points
        .iter()
        .filter_map(Point::to_plane)
        .map(|(x, y)| Sample::At(x, y))
        .collect()
}

fn label<T: ecalg_api::Coordinate>(name: &'static str, p: &Point<T>) -> Label {
    Label {
        name,
        at: p.to_plane(),
    }
}
