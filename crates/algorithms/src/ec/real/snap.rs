//! Snapping edited coordinates onto the real curve

use super::RealCurve;
use ecalg_common::round10;

impl RealCurve {
    /// Move `requested` onto the curve, guided by the edit from `prev`.
    ///
    /// An edited abscissa left of the curve jumps to the leftmost root, and
    /// one inside the gap between the oval and the unbounded branch jumps to
    /// the gap edge in the direction of travel. Otherwise the ordinate is
    /// recomputed on the half-plane the requested ordinate points to. An
    /// edited ordinate keeps its value and picks the abscissa nearest to the
    /// previous one. Results are rounded for display.
    pub(super) fn snap(&self, prev: (f64, f64), requested: (f64, f64)) -> (f64, f64) {
        let (x_prev, y_prev) = prev;
        let (mut x, mut y) = requested;
        let exp = self.config.round_exp;

        if !x.is_finite() || !y.is_finite() {
            return prev;
        }
        let first_root = match self.roots.first() {
            Some(&r) => r,
            None => return prev,
        };

        if x == x_prev && y == y_prev {
            // Untouched, but the coefficients may have moved under it
            let mut valid_y = round10(self.get_y(x), exp);
            if y < 0.0 {
                valid_y = -valid_y;
            }
            if y == valid_y {
                return (x, y);
            }
        }

        if x != x_prev {
            if x < first_root {
                x = first_root;
                y = 0.0;
            } else if self.roots.len() > 2 && self.roots[1] < x && x < self.roots[2] {
                x = self.roots[if x > x_prev { 2 } else { 1 }];
                y = 0.0;
            } else {
                let upper = self.upper_y(x);
                y = if y > 0.0 || (y == 0.0 && y >= y_prev) {
                    upper
                } else {
                    -upper
                };
            }
        } else {
            // Every ordinate is reachable, so there is always a candidate
            let mut best: Option<(f64, f64)> = None;
            for candidate in self.get_x(y) {
                let distance = (candidate - x_prev).abs();
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((candidate, distance));
                }
            }
            if let Some((candidate, _)) = best {
                x = candidate;
            }
        }

        (round10(x, exp), round10(y, exp))
    }
}
