//! Piecewise friction factor evaluation across flow regimes.

use log::debug;

use super::{
    ColebrookConfig, FlowRegime, IterationReport, PipeFlow, TurbulentFormula, colebrook,
    regime::{LAMINAR_LIMIT, TURBULENT_LIMIT},
};

/// A Darcy friction factor and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionResult {
    /// Darcy–Weisbach friction factor.
    pub friction_factor: f64,

    /// Reynolds number based on pipe diameter.
    pub reynolds: f64,

    /// Wall roughness divided by pipe diameter.
    pub relative_roughness: f64,

    /// Regime and formula used.
    pub regime: FlowRegime,

    /// Iteration diagnostics, present only when Colebrook–White was solved.
    ///
    /// In the transitional regime this describes the solve at `Re = 4000`.
    pub iteration: Option<IterationReport>,
}

/// Evaluates the friction factor for a validated pipe flow.
pub(crate) fn friction(flow: &PipeFlow, config: &ColebrookConfig) -> FrictionResult {
    evaluate(flow.reynolds(), flow.relative_roughness(), config)
}

/// Evaluates the friction factor from a Reynolds number and relative roughness.
///
/// Both arguments are assumed finite, with `reynolds > 0` and
/// `relative_roughness >= 0`.
pub(super) fn evaluate(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> FrictionResult {
    let regime = FlowRegime::classify(reynolds, relative_roughness);

    let (friction_factor, iteration) = match regime {
        FlowRegime::Laminar => (laminar(reynolds), None),
        FlowRegime::Transitional => {
            let f_laminar = laminar(LAMINAR_LIMIT);
            let (f_turbulent, report) =
                colebrook::solve(TURBULENT_LIMIT, relative_roughness, config);
            let x = (reynolds - LAMINAR_LIMIT) / (TURBULENT_LIMIT - LAMINAR_LIMIT);
            (f_laminar * (1.0 - x) + f_turbulent * x, Some(report))
        }
        FlowRegime::Turbulent(TurbulentFormula::Blasius) => (0.316 * reynolds.powf(-0.25), None),
        FlowRegime::Turbulent(TurbulentFormula::FullyRough) => {
            ((2.0 * (3.7 / relative_roughness).log10()).powi(-2), None)
        }
        FlowRegime::Turbulent(TurbulentFormula::ColebrookWhite) => {
            let (f, report) = colebrook::solve(reynolds, relative_roughness, config);
            (f, Some(report))
        }
    };

    debug!(
        "friction factor: re={reynolds}, eps={relative_roughness}, regime={}, f={friction_factor}",
        regime.name()
    );

    FrictionResult {
        friction_factor,
        reynolds,
        relative_roughness,
        regime,
        iteration,
    }
}

fn laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(re: f64, eps: f64) -> FrictionResult {
        evaluate(re, eps, &ColebrookConfig::default())
    }

    #[test]
    fn laminar_is_exact() {
        for re in [1e-3, 1.0, 100.0, 1691.99, 2299.9] {
            let result = eval(re, 0.0018);
            assert_eq!(result.regime, FlowRegime::Laminar);
            assert_eq!(result.friction_factor, 64.0 / re);
            assert!(result.iteration.is_none());
        }
    }

    #[test]
    fn continuous_at_laminar_boundary() {
        let below = eval(2300.0 - 1e-9, 0.0018).friction_factor;
        let at = eval(2300.0, 0.0018);

        assert_eq!(at.regime, FlowRegime::Transitional);
        assert_relative_eq!(below, at.friction_factor, max_relative = 1e-9);
    }

    #[test]
    fn continuous_at_turbulent_boundary_for_rough_pipes() {
        let below = eval(4000.0 - 1e-9, 0.0018).friction_factor;
        let at = eval(4000.0, 0.0018);

        assert_eq!(
            at.regime,
            FlowRegime::Turbulent(TurbulentFormula::ColebrookWhite)
        );
        assert_relative_eq!(below, at.friction_factor, max_relative = 1e-6);
    }

    #[test]
    fn transitional_blend_is_linear() {
        let lo = eval(2300.0, 0.0018).friction_factor;
        let hi = eval(3999.999_999, 0.0018).friction_factor;
        let mid = eval(3150.0, 0.0018);

        assert!(mid.iteration.is_some_and(|r| r.is_converged()));
        assert_relative_eq!(mid.friction_factor, 0.5 * (lo + hi), max_relative = 1e-6);
    }

    #[test]
    fn blasius_for_smooth_pipes() {
        let result = eval(1e4, 0.0);
        assert_eq!(result.regime, FlowRegime::Turbulent(TurbulentFormula::Blasius));
        assert_relative_eq!(result.friction_factor, 0.316 / 10.0, max_relative = 1e-12);
    }

    #[test]
    fn fully_rough_is_reynolds_independent() {
        let a = eval(5e6, 0.001);
        let b = eval(5e7, 0.001);

        assert_eq!(a.regime, FlowRegime::Turbulent(TurbulentFormula::FullyRough));
        assert_eq!(a.friction_factor, b.friction_factor);
        assert_relative_eq!(a.friction_factor, 0.019_63, max_relative = 1e-3);
    }

    #[test]
    fn colebrook_white_general_case() {
        let result = eval(1e5, 1e-4);
        assert_eq!(
            result.regime,
            FlowRegime::Turbulent(TurbulentFormula::ColebrookWhite)
        );
        assert!(result.iteration.is_some_and(|r| r.is_converged()));
        assert_relative_eq!(result.friction_factor, 0.018_51, max_relative = 1e-3);
    }
}
