//! Piecewise-linear lookup over tabulated chart data.
//!
//! Published loss-coefficient charts are digitized as `(x, y)` pairs sorted
//! by `x`. Lookups between points interpolate linearly. Lookups outside the
//! tabulated range are clamped to the nearest endpoint rather than
//! extrapolated, since chart data says nothing beyond its bounds.

/// A static table of `(x, y)` points with strictly increasing `x`.
#[derive(Debug, Clone, Copy)]
pub struct Table<const N: usize> {
    points: [(f64, f64); N],
}

impl<const N: usize> Table<N> {
    /// Creates a table from points sorted by strictly increasing `x`.
    ///
    /// Ordering is checked at compile time when the table is a `const`.
    ///
    /// # Panics
    ///
    /// Panics if the table is empty or `x` is not strictly increasing.
    #[must_use]
    pub const fn new(points: [(f64, f64); N]) -> Self {
        assert!(N >= 1, "lookup table requires at least one point");
        let mut i = 1;
        while i < N {
            assert!(
                points[i].0 > points[i - 1].0,
                "lookup table x values must be strictly increasing"
            );
            i += 1;
        }
        Self { points }
    }

    /// Returns the interpolated `y` at `x`, clamped to the table bounds.
    ///
    /// A `NaN` input yields `NaN`.
    #[must_use]
    pub fn lookup(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        let (x_first, y_first) = self.points[0];
        let (x_last, y_last) = self.points[N - 1];
        if x <= x_first {
            return y_first;
        }
        if x >= x_last {
            return y_last;
        }

        // The first point with x_hi > x exists because x < x_last.
        let hi = self.points.partition_point(|&(px, _)| px <= x);
        let (x_lo, y_lo) = self.points[hi - 1];
        let (x_hi, y_hi) = self.points[hi];
        let t = (x - x_lo) / (x_hi - x_lo);
        y_lo * (1.0 - t) + y_hi * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const TABLE: Table<3> = Table::new([(1.0, 10.0), (2.0, 20.0), (4.0, 0.0)]);

    #[test]
    fn hits_tabulated_points() {
        assert_relative_eq!(TABLE.lookup(1.0), 10.0);
        assert_relative_eq!(TABLE.lookup(2.0), 20.0);
        assert_relative_eq!(TABLE.lookup(4.0), 0.0);
    }

    #[test]
    fn interpolates_between_points() {
        assert_relative_eq!(TABLE.lookup(1.5), 15.0);
        assert_relative_eq!(TABLE.lookup(3.0), 10.0);
        assert_relative_eq!(TABLE.lookup(3.5), 5.0);
    }

    #[test]
    fn clamps_outside_bounds() {
        assert_relative_eq!(TABLE.lookup(0.0), 10.0);
        assert_relative_eq!(TABLE.lookup(-100.0), 10.0);
        assert_relative_eq!(TABLE.lookup(1e9), 0.0);
        assert!(TABLE.lookup(f64::NAN).is_nan());
    }
}
