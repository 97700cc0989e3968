//! The Bessel wall-correction ratio `I0(N) / (N I1(N))`.

use crate::support::{
    bessel::BesselEvaluation,
    guard::{self, DomainError},
};

use super::WallModelConfig;

const CONTEXT: &str = "wall number";

/// Evaluates the wall-correction ratio for a wall number `N`.
///
/// The ratio diverges like `2/N²` as `N → 0`, where `N I1(N)` vanishes.
/// Below `config.small_wall_number` it is taken from the leading terms of
/// its Laurent series, which are accurate to `O(N⁴)` there.
pub(super) fn bessel_ratio(wall_number: f64, config: &WallModelConfig) -> Result<f64, DomainError> {
    if !wall_number.is_finite() || wall_number <= 0.0 {
        return Err(DomainError::DivisionByNearZero(CONTEXT));
    }

    if wall_number < config.small_wall_number {
        let n2 = wall_number * wall_number;
        return Ok(2.0 / n2 + 0.25 - n2 / 96.0);
    }

    let eval = BesselEvaluation::at(wall_number);
    guard::div(eval.i0, wall_number * eval.i1, CONTEXT)
}
