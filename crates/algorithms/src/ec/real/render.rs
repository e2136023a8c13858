//! Plot framing and sampling over the reals

use super::RealCurve;
use crate::ec::plot_range_of;
use ecalg_api::{PlotRange, Point, Sample};

impl RealCurve {
    /// Square range around `extra`, the roots, the stationary points and
    /// their mirrors.
    pub(super) fn framing_range(&self, extra: &[Point<f64>]) -> PlotRange {
        let mut points: Vec<(f64, f64)> = extra.iter().filter_map(Point::to_plane).collect();

        points.extend(self.roots.iter().map(|&x| (x, 0.0)));
        for &(x, y) in &self.stationary {
            points.push((x, y));
            points.push((x, -y));
        }

        // A lone root would collapse the box onto the left half-plane
        if self.roots.len() == 1 && self.stationary.is_empty() {
            points.push((1.0, 0.0));
        }

        plot_range_of(&points, self.config.margin_factor)
    }

    /// Curve samples from the leftmost root to the right edge of `range`.
    ///
    /// Each branch is traced along its upper half right to left, then
    /// mirrored below the axis left to right. With three roots the oval
    /// between the first two is closed and separated from the unbounded
    /// branch by a break.
    pub(super) fn sample_curve(&self, range: &PlotRange) -> Vec<Sample> {
        let step = range.width() / self.config.resolution as f64;
        if step.is_nan() || step <= 0.0 || step.is_infinite() {
            return Vec::new();
        }

        let mut samples = Vec::new();
        match self.roots.as_slice() {
            [] => {}
            [r0, r1, r2] => {
                self.push_branch(&mut samples, *r0, *r1, step, true);
                if range.x_max > *r2 {
                    samples.push(Sample::Break);
                    self.push_branch(&mut samples, *r2, range.x_max, step, false);
                }
            }
            [r0, ..] => self.push_branch(&mut samples, *r0, range.x_max, step, false),
        }
        samples
    }

    fn push_branch(&self, out: &mut Vec<Sample>, from: f64, to: f64, step: f64, close: bool) {
        // Branch lies entirely right of the range
        if to <= from {
            return;
        }
        let start = out.len();

        let mut i = 0u32;
        loop {
            let x = to - f64::from(i) * step;
            if x <= from {
                break;
            }
            out.push(Sample::At(x, self.upper_y(x)));
            i += 1;
        }
        // `to - from` is rarely a multiple of `step`
        out.push(Sample::At(from, self.upper_y(from)));

        for i in (start..out.len() - 1).rev() {
            if let Sample::At(x, y) = out[i] {
                out.push(Sample::At(x, -y));
            }
        }

        if close {
            out.push(out[start]);
        }
    }

    /// Endpoints of the line through `p` and `q` across `range`.
    ///
    /// A vertical line spans the range's height at `p`'s abscissa.
    pub(super) fn sample_line(
        &self,
        p: &Point<f64>,
        q: &Point<f64>,
        range: &PlotRange,
    ) -> Vec<Sample> {
        let ((px, py), (qx, qy)) = match (p.coords(), q.coords()) {
            (Some(p), Some(q)) => (p, q),
            _ => return Vec::new(),
        };

        let mut m = (py - qy) / (px - qx);
        if m.is_nan() {
            m = self.tangent_slope(px, py);
        }

        if !m.is_finite() {
            return vec![Sample::At(px, range.y_min), Sample::At(px, range.y_max)];
        }

        vec![
            Sample::At(range.x_min, m * (range.x_min - px) + py),
            Sample::At(range.x_max, m * (range.x_max - px) + py),
        ]
    }
}
