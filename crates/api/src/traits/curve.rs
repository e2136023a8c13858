// File: crates/api/src/traits/curve.rs

//! Trait definition for an elliptic-curve algebra over one numeric domain
//!
//! A curve `y² = x³ + ax + b` is fully determined by its parameter record.
//! Each implementation recomputes all of its derived state (roots, point
//! sets, flags) when it is built, and is immutable afterwards.

use crate::types::{Coordinate, PlotRange, Point, Sample, SeriesStyle};
use crate::Result;
use core::fmt::Debug;

/// Group law, rendering and snapping over one algebraic domain.
///
/// Scalar multiplication is written once, generically, on top of
/// [`add_points`](CurveAlgebra::add_points) and
/// [`neg_point`](CurveAlgebra::neg_point).
pub trait CurveAlgebra: Sized {
    /// Coordinate type of finite points.
    type Coord: Coordinate;

    /// Parameter record that determines the curve.
    type Params: Copy + Debug;

    /// Returns the domain name.
    fn name() -> &'static str;

    /// Build the curve and all of its derived state.
    ///
    /// Fails with `InvalidParameter` when the record is out of domain.
    fn from_params(params: Self::Params) -> Result<Self>;

    /// The parameter record this curve was built from.
    fn params(&self) -> Self::Params;

    /// `p + q` under the chord-and-tangent group law.
    fn add_points(
        &self,
        p: &Point<Self::Coord>,
        q: &Point<Self::Coord>,
    ) -> Result<Point<Self::Coord>>;

    /// `-p`; the point at infinity is its own negation.
    fn neg_point(&self, p: &Point<Self::Coord>) -> Point<Self::Coord>;

    /// True iff the discriminant `4a³ + 27b²` vanishes in this domain.
    fn is_singular(&self) -> bool;

    /// A viewport showing the curve's notable points and every finite point
    /// in `extra`.
    fn plot_range(&self, extra: &[Point<Self::Coord>]) -> PlotRange;

    /// Samples of the curve inside `range`, with breaks between branches.
    fn curve_samples(&self, range: &PlotRange) -> Vec<Sample>;

    /// How [`curve_samples`](CurveAlgebra::curve_samples) should be drawn.
    fn curve_style(&self) -> SeriesStyle;

    /// Samples of the line through `p` and `q` (the tangent when equal).
    ///
    /// Either operand being the point at infinity yields no samples.
    fn line_samples(
        &self,
        p: &Point<Self::Coord>,
        q: &Point<Self::Coord>,
        range: &PlotRange,
    ) -> Result<Vec<Sample>>;

    /// Move a user-edited coordinate pair onto the curve.
    ///
    /// `prev` is the last valid pair shown for this point and `requested`
    /// the edited one; the direction of the edit decides between
    /// candidates.
    fn fix_point_coordinate(
        &self,
        prev: (Self::Coord, Self::Coord),
        requested: (Self::Coord, Self::Coord),
    ) -> (Self::Coord, Self::Coord);
}
