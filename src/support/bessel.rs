//! Modified Bessel functions of the first kind, orders zero and one.
//!
//! Evaluated with the polynomial approximations of Abramowitz and Stegun
//! (9.8.1–9.8.4). Each function uses two disjoint approximations: a
//! polynomial in `t = (x / 3.75)²` for `|x| < 3.75`, and an asymptotic
//! form `e^|x| / √|x| · P(3.75 / |x|)` for `|x| ≥ 3.75`. The published
//! relative error bound is below 2.2e-7 over the whole real line.
//!
//! `I0` is even and `I1` is odd, so both are defined for negative arguments.
//! Neither function fails: the result grows like `e^|x|` and overflows to
//! `+inf` (or `-inf` for `I1`) near `|x| ≈ 713`. Callers that cannot accept
//! an infinite value must check the result.

/// Boundary between the small- and large-argument approximations.
const SPLIT: f64 = 3.75;

/// Coefficients of `I0(x)` in powers of `t = (x / 3.75)²`, for `|x| < 3.75`.
const I0_SMALL: [f64; 7] = [
    1.0, 3.515_622_9, 3.089_942_4, 1.206_749_2, 0.265_973_2, 0.036_076_8, 0.004_581_3,
];

/// Coefficients of `√x e^-x I0(x)` in powers of `3.75 / x`, for `x ≥ 3.75`.
const I0_LARGE: [f64; 9] = [
    0.398_942_28,
    0.013_285_92,
    0.002_253_19,
    -0.001_575_65,
    0.009_162_81,
    -0.020_577_06,
    0.026_355_37,
    -0.016_476_33,
    0.003_923_77,
];

/// Coefficients of `I1(x) / x` in powers of `t = (x / 3.75)²`, for `|x| < 3.75`.
const I1_SMALL: [f64; 7] = [
    0.5,
    0.878_905_94,
    0.514_988_69,
    0.150_849_34,
    0.026_587_33,
    0.003_015_32,
    0.000_324_11,
];

/// Coefficients of `√x e^-x I1(x)` in powers of `3.75 / x`, for `x ≥ 3.75`.
const I1_LARGE: [f64; 9] = [
    0.398_942_28,
    -0.039_880_24,
    -0.003_620_18,
    0.001_638_01,
    -0.010_315_55,
    0.022_829_67,
    -0.028_953_12,
    0.017_876_54,
    -0.004_200_59,
];

/// Both modified Bessel functions evaluated at one argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BesselEvaluation {
    pub argument: f64,
    pub i0: f64,
    pub i1: f64,
}

impl BesselEvaluation {
    /// Evaluates `I0` and `I1` at `x`.
    #[must_use]
    pub fn at(x: f64) -> Self {
        Self {
            argument: x,
            i0: i0(x),
            i1: i1(x),
        }
    }
}

/// Modified Bessel function of the first kind, order zero.
///
/// # Example
///
/// ```
/// use packed_bed_models::support::bessel::i0;
///
/// assert_eq!(i0(0.0), 1.0);
/// assert_eq!(i0(-2.0), i0(2.0));
/// ```
#[must_use]
pub fn i0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < SPLIT {
        let t = (x / SPLIT).powi(2);
        horner(&I0_SMALL, t)
    } else {
        asymptotic_scale(ax) * horner(&I0_LARGE, SPLIT / ax)
    }
}

/// Modified Bessel function of the first kind, order one.
///
/// # Example
///
/// ```
/// use packed_bed_models::support::bessel::i1;
///
/// assert_eq!(i1(0.0), 0.0);
/// assert_eq!(i1(-2.0), -i1(2.0));
/// ```
#[must_use]
pub fn i1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < SPLIT {
        let t = (x / SPLIT).powi(2);
        x * horner(&I1_SMALL, t)
    } else {
        let magnitude = asymptotic_scale(ax) * horner(&I1_LARGE, SPLIT / ax);
        magnitude.copysign(x)
    }
}

/// The `e^x / √x` envelope shared by both large-argument forms.
fn asymptotic_scale(ax: f64) -> f64 {
    ax.exp() / ax.sqrt()
}

/// Evaluates a polynomial with coefficients in ascending powers.
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Ascending power series `Σ (x²/4)^k / (k! (k + n)!)` scaled by `(x/2)^n`.
    ///
    /// Every term is positive, so summation is exact to f64 precision and
    /// the series serves as a reference over the tested range.
    fn series(n: i32, x: f64) -> f64 {
        let q = x * x / 4.0;
        let mut term = (x / 2.0).powi(n) / (1..=n).map(f64::from).product::<f64>();
        let mut sum = term;
        let mut k = 1.0;
        while term.abs() > sum.abs() * 1e-18 {
            term *= q / (k * (k + f64::from(n)));
            sum += term;
            k += 1.0;
        }
        sum
    }

    fn sample_points() -> impl Iterator<Item = f64> {
        (1..=500).map(|i| f64::from(i) * 0.1)
    }

    #[test]
    fn defining_values_at_zero() {
        assert_eq!(i0(0.0), 1.0);
        assert_eq!(i1(0.0), 0.0);
    }

    #[test]
    fn matches_series_reference() {
        for x in sample_points() {
            assert_relative_eq!(i0(x), series(0, x), max_relative = 1e-6);
            assert_relative_eq!(i1(x), series(1, x), max_relative = 1e-6);
        }
    }

    #[test]
    fn symmetry() {
        for x in sample_points() {
            assert_eq!(i0(-x), i0(x));
            assert_eq!(i1(-x), -i1(x));
            assert_relative_eq!(i1(-x), -series(1, x), max_relative = 1e-6);
        }
    }

    #[test]
    fn continuous_across_split() {
        let below = SPLIT - 1e-12;
        assert_relative_eq!(i0(below), i0(SPLIT), max_relative = 1e-6);
        assert_relative_eq!(i1(below), i1(SPLIT), max_relative = 1e-6);
    }

    #[test]
    fn large_arguments_overflow_without_clamping() {
        assert_eq!(i0(800.0), f64::INFINITY);
        assert_eq!(i1(800.0), f64::INFINITY);
        assert_eq!(i1(-800.0), f64::NEG_INFINITY);
    }

    #[test]
    fn evaluation_bundles_both_orders() {
        let eval = BesselEvaluation::at(2.5);
        assert_eq!(eval.argument, 2.5);
        assert_eq!(eval.i0, i0(2.5));
        assert_eq!(eval.i1, i1(2.5));
    }
}
