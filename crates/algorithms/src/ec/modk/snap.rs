//! Snapping edited coordinates onto the finite point set

use super::ModularCurve;

impl ModularCurve {
    /// Move `requested` to a curve point, guided by the edit from `prev`.
    ///
    /// Only points lying in the direction of the edit are considered: to
    /// the right or left of `prev` when x changed, above or below it when
    /// only y changed, everywhere when neither did. When that leaves
    /// nothing, `prev` stays if it is still on the curve; otherwise every
    /// point is a candidate. The candidate nearest to `requested` wins,
    /// ties going to the first in enumeration order.
    pub(super) fn snap(&self, prev: (i64, i64), requested: (i64, i64)) -> (i64, i64) {
        let (x_prev, y_prev) = prev;
        let (x, y) = requested;

        if self.has_point(x, y) {
            return requested;
        }

        let directed: Vec<(i64, i64)> = self
            .points
            .iter()
            .copied()
            .filter(|&(px, py)| {
                if x > x_prev {
                    px > x_prev
                } else if x < x_prev {
                    px < x_prev
                } else if y > y_prev {
                    py > y_prev
                } else if y < y_prev {
                    py < y_prev
                } else {
                    true
                }
            })
            .collect();

        let candidates: &[(i64, i64)] = if directed.is_empty() {
            if self.has_point(x_prev, y_prev) {
                return prev;
            }
            &self.points
        } else {
            &directed
        };

        candidates
            .iter()
            .copied()
            .min_by_key(|&(px, py)| {
                // Requests far outside the grid saturate instead of overflowing
                let dx = x as i128 - px as i128;
                let dy = y as i128 - py as i128;
                dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
            })
            .unwrap_or(prev)
    }
}
