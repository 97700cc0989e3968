//! Fixed-point solution of the Colebrook–White equation.
//!
//! The Colebrook–White relation is implicit in the friction factor:
//!
//! ```text
//! 1/√f = -2 log10(ε_r / 3.7 + 2.51 / (Re √f))
//! ```
//!
//! Iteration starts from the explicit Swamee–Jain approximation, which is
//! already within a few percent, and applies the update
//! `f ← (-2 log10(ε_r / 3.7 + 2.51 / (Re √f)))^-2` until successive values
//! differ by less than the tolerance or the iteration cap is reached.
//! The cap guarantees termination; hitting it is reported, not raised.

use log::{debug, warn};

/// Solver configuration for the Colebrook–White iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Maximum iteration count.
    pub max_iters: u32,

    /// Absolute tolerance on the change in friction factor between iterations.
    pub tolerance: f64,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tolerance: 1e-6,
        }
    }
}

/// Termination status of an iterative friction factor solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The change between iterations fell below the tolerance.
    Converged,

    /// The iteration cap was reached first; the last iterate is returned.
    MaxIters,
}

/// Diagnostics from an iterative friction factor solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    /// Number of updates performed.
    pub iters: u32,

    /// Whether the tolerance was met.
    pub status: Status,

    /// Absolute change in friction factor over the final update.
    pub last_step: f64,
}

impl IterationReport {
    /// Returns `true` if the solve met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Swamee–Jain explicit approximation, used as the iteration seed.
///
/// `f = 0.25 / log10(ε_r / 3.7 + 5.74 / Re^0.9)²`
pub(super) fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    0.25 / (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9))
        .log10()
        .powi(2)
}

/// One fixed-point update of the Colebrook–White equation.
pub(super) fn update(f: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let rhs = -2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * f.sqrt())).log10();
    rhs.powi(-2)
}

/// Solves the Colebrook–White equation by fixed-point iteration.
///
/// Returns the last iterate and an [`IterationReport`]. A report with
/// [`Status::MaxIters`] means the returned value did not meet the tolerance.
pub(super) fn solve(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> (f64, IterationReport) {
    let mut f = swamee_jain(reynolds, relative_roughness);
    let mut last_step = f64::INFINITY;

    for iters in 1..=config.max_iters {
        let next = update(f, reynolds, relative_roughness);
        last_step = (next - f).abs();
        f = next;

        if last_step < config.tolerance {
            debug!("colebrook-white converged: re={reynolds}, eps={relative_roughness}, f={f}, iters={iters}");
            return (
                f,
                IterationReport {
                    iters,
                    status: Status::Converged,
                    last_step,
                },
            );
        }
    }

    warn!(
        "colebrook-white hit iteration limit: re={reynolds}, eps={relative_roughness}, f={f}, last_step={last_step}"
    );
    (
        f,
        IterationReport {
            iters: config.max_iters,
            status: Status::MaxIters,
            last_step,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_value_at_transition_boundary() {
        let (f, report) = solve(4000.0, 0.0002, &ColebrookConfig::default());

        assert!(report.is_converged());
        assert_relative_eq!(f, 0.0401, max_relative = 5e-3);
    }

    #[test]
    fn converged_solution_satisfies_the_implicit_equation() {
        for (re, eps) in [(4000.0, 0.0018), (1e5, 1e-4), (2e6, 0.005), (5e4, 0.0)] {
            let (f, report) = solve(re, eps, &ColebrookConfig::default());

            assert!(report.is_converged());
            assert!(report.iters <= 50);
            assert!((update(f, re, eps) - f).abs() < 1e-6);
        }
    }

    #[test]
    fn seed_is_close_to_solution() {
        let (f, _) = solve(1e5, 1e-4, &ColebrookConfig::default());
        assert_relative_eq!(swamee_jain(1e5, 1e-4), f, max_relative = 0.03);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let config = ColebrookConfig {
            max_iters: 1,
            tolerance: 0.0,
        };
        let (f, report) = solve(1e5, 1e-4, &config);

        assert_eq!(report.status, Status::MaxIters);
        assert_eq!(report.iters, 1);
        assert!(f.is_finite());
        assert!(!report.is_converged());
    }
}
