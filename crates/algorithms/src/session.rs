//! The current curve of an interactive front-end
//!
//! A [`CurveSession`] owns one curve snapshot. Parameter changes replace the
//! snapshot wholesale; a rejected change leaves the previous one in place.
//! Every query recomputes from the snapshot, so nothing is cached between
//! calls.

use crate::error::{Result, ResultExt};
use crate::scalar::mul_point;
use ecalg_api::{CurveAlgebra, PlotRange, Point, Sample};

/// Owner of the current curve in one domain
#[derive(Debug, Clone)]
pub struct CurveSession<C: CurveAlgebra> {
    curve: C,
}

impl<C: CurveAlgebra> CurveSession<C> {
    /// Start a session from a parameter record.
    pub fn new(params: C::Params) -> Result<Self> {
        let curve = C::from_params(params).with_context("CurveSession::new")?;
        Ok(Self { curve })
    }

    /// Start a session from an already built curve.
    pub fn from_curve(curve: C) -> Self {
        Self { curve }
    }

    /// Replace the curve.
    ///
    /// Fails with `InvalidParameter` when the record is out of domain, in
    /// which case the current curve is kept.
    pub fn set_parameters(&mut self, params: C::Params) -> Result<()> {
        let curve = C::from_params(params).with_context("set_parameters")?;
        ecalg_common::trace!("{}: parameters set to {:?}", C::name(), params);
        self.curve = curve;
        Ok(())
    }

    /// The current curve
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Parameters of the current curve
    pub fn params(&self) -> C::Params {
        self.curve.params()
    }

    /// Range framing the curve's notable points and `extra`
    pub fn plot_range(&self, extra: &[Point<C::Coord>]) -> PlotRange {
        self.curve.plot_range(extra)
    }

    /// Curve samples across the default range
    pub fn curve_samples(&self) -> Vec<Sample> {
        let range = self.curve.plot_range(&[]);
        self.curve.curve_samples(&range)
    }

    /// Line samples through `p` and `q`, across a range framing both
    pub fn line_samples(&self, p: &Point<C::Coord>, q: &Point<C::Coord>) -> Result<Vec<Sample>> {
        let range = self.curve.plot_range(&[*p, *q]);
        self.curve.line_samples(p, q, &range)
    }

    /// The curve point an edit from `prev` to `requested` lands on
    pub fn snap_point(
        &self,
        prev: (C::Coord, C::Coord),
        requested: (C::Coord, C::Coord),
    ) -> Point<C::Coord> {
        let (x, y) = self.curve.fix_point_coordinate(prev, requested);
        Point::new(x, y)
    }

    /// p + q on the current curve
    pub fn add_points(&self, p: &Point<C::Coord>, q: &Point<C::Coord>) -> Result<Point<C::Coord>> {
        self.curve.add_points(p, q)
    }

    /// n·p on the current curve
    pub fn mul_point(&self, n: i64, p: &Point<C::Coord>) -> Result<Point<C::Coord>> {
        mul_point(&self.curve, n, p)
    }
}
