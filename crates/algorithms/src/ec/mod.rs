//! Elliptic curves y² = x³ + ax + b over two algebraic domains
//!
//! [`RealCurve`] works over the reals with `f64` coordinates. [`ModularCurve`]
//! works over the integers modulo `k` with `i64` coordinates; `k` need not be
//! prime, in which case some slopes have no inverse and the group law reports
//! [`Error::UndefinedInverse`](crate::error::Error::UndefinedInverse).
//!
//! Both implement [`CurveAlgebra`](ecalg_api::CurveAlgebra). Every derived
//! quantity is computed once in the constructor and the curve is immutable
//! afterwards; a parameter change builds a new curve.

mod modk;
mod real;

pub use modk::{ModularCurve, ModularParams};
pub use real::{RealCurve, RealParams};

use ecalg_api::PlotRange;
use ecalg_params::plot::{DEGENERATE_MARGIN, DISPLAY_ROUND_EXP, MARGIN_FACTOR, PLOT_RESOLUTION};

/// Rendering knobs of the real domain
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Number of sampling steps across the plot width
    pub resolution: usize,
    /// Margin around the points of interest, as a fraction of their extent
    pub margin_factor: f64,
    /// Decimal exponent snapped coordinates are rounded to
    pub round_exp: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: PLOT_RESOLUTION,
            margin_factor: MARGIN_FACTOR,
            round_exp: DISPLAY_ROUND_EXP,
        }
    }
}

/// Bounding box of `points`, padded so that both axes span the same length.
///
/// With a zero `margin_factor` the box is tight. When every point coincides
/// the padding falls back to a fixed margin.
pub(crate) fn plot_range_of(points: &[(f64, f64)], margin_factor: f64) -> PlotRange {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if points.is_empty() {
        x_min = 0.0;
        x_max = 0.0;
        y_min = 0.0;
        y_max = 0.0;
    }

    let (x_margin, y_margin) = if margin_factor != 0.0 {
        let dx = x_max - x_min;
        let dy = y_max - y_min;
        let mut x_margin = margin_factor * dx;
        let mut y_margin = margin_factor * dy;

        // Square the box: pad the shorter axis up to the longer one
        if x_margin > y_margin {
            y_margin = (dx - dy) / 2.0 + x_margin;
        } else {
            x_margin = (dy - dx) / 2.0 + y_margin;
        }

        if x_margin == 0.0 {
            (DEGENERATE_MARGIN, DEGENERATE_MARGIN)
        } else {
            (x_margin, y_margin)
        }
    } else {
        (0.0, 0.0)
    };

    PlotRange {
        x_min: x_min - x_margin,
        x_max: x_max + x_margin,
        y_min: y_min - y_margin,
        y_max: y_max + y_margin,
    }
}
