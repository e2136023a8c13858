//! Plot framing and line wrapping on the k × k grid

use super::ModularCurve;
use crate::error::Result;
use crate::ec::plot_range_of;
use ecalg_api::{PlotRange, Point, Sample};
use ecalg_common::{inverse_of, modulo};

impl ModularCurve {
    /// The whole grid [0, k − 1]², stretched to cover `extra`, unpadded.
    pub(super) fn framing_range(&self, extra: &[Point<i64>]) -> PlotRange {
        let mut points: Vec<(f64, f64)> = extra.iter().filter_map(Point::to_plane).collect();
        let last = (self.k - 1) as f64;
        points.push((0.0, 0.0));
        points.push((last, last));
        plot_range_of(&points, 0.0)
    }

    /// Segments of the line through `p` and `q` wrapped onto the grid.
    ///
    /// The slope is taken as its residue of least absolute value so the line
    /// wraps as few times as possible. Starting from the copy of the line
    /// whose intercept lies in [0, k), each crossing of the top edge (or the
    /// bottom edge for a negative slope) emits the exit point, a break and
    /// the entry point on the opposite edge, until the crossing reaches the
    /// right edge of `range`. Horizontal and vertical lines are single
    /// unwrapped segments.
    pub(super) fn sample_line(
        &self,
        p: &Point<i64>,
        q: &Point<i64>,
        range: &PlotRange,
    ) -> Result<Vec<Sample>> {
        let ((px, py), (qx, qy)) = match (p.coords(), q.coords()) {
            (Some(p), Some(q)) => (p, q),
            _ => return Ok(Vec::new()),
        };
        let k = self.k;
        let vertical = vec![
            Sample::At(px as f64, range.y_min),
            Sample::At(px as f64, range.y_max),
        ];

        let slope = if px != qx {
            (py as i128 - qy as i128) * self.inverse(px as i128 - qx as i128)? as i128
        } else if py == qy {
            match inverse_of(modulo(2 * py as i128, k), k) {
                Some(inv) => (3 * px as i128 * px as i128 + self.a as i128) * inv as i128,
                None => return Ok(vertical),
            }
        } else {
            return Ok(vertical);
        };

        // Truncated remainder: the sign of the slope survives
        let mut m = (slope % k as i128) as i64;
        if m == 0 {
            return Ok(vec![
                Sample::At(range.x_min, py as f64),
                Sample::At(range.x_max, py as f64),
            ]);
        }
        if m < 0 && -m > m + k {
            m += k;
        } else if m > 0 && -m < m - k {
            m -= k;
        }

        let intercept = modulo(py as i128 - m as i128 * px as i128, k);

        let (m, k) = (m as f64, k as f64);
        let mut q = intercept as f64;
        let right_edge = range.x_max.min(k);
        let mut samples = vec![Sample::At(range.x_min, m * range.x_min + q)];

        loop {
            let (exit_y, entry_y) = if m > 0.0 { (k, 0.0) } else { (0.0, k) };
            let x = (exit_y - q) / m;
            if x >= right_edge {
                break;
            }

            samples.push(Sample::At(x, exit_y));
            samples.push(Sample::Break);
            samples.push(Sample::At(x, entry_y));

            if m > 0.0 {
                q -= k;
            } else {
                q += k;
            }
        }

        samples.push(Sample::At(range.x_max, m * range.x_max + q));
        Ok(samples)
    }
}
