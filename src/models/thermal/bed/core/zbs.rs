//! Static effective conductivity of a packed bed (Zehner–Bauer–Schlünder).
//!
//! For void fraction `ε`, conductivity ratio `κ = k_s / k_f` and shape
//! factor `B`, with `δ = 1 - B/κ`:
//!
//! ```text
//! λ/λ_f = (1 - √(1-ε)) + √(1-ε) · 2/δ · [ (1 - 1/κ) B/δ² ln(κ/B) - (B-1)/δ - (B+1)/2 ]
//! ```
//!
//! The bracket is singular at `κ = B`. The void fraction must lie in `(0, 1)`
//! and both `κ` and `B` must be strictly positive.

use log::debug;
use uom::si::{
    f64::ThermalConductivity, ratio::ratio, thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::guard::{self, DomainError, NEAR_ZERO, fraction, positive};

use super::{BedConductivityError, StaticBedInputs};

/// Effective bed conductivity relative to the fluid and in absolute terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedConductivity {
    /// `λ_bed / λ_fluid`.
    pub lambda_ratio: f64,
    pub effective_conductivity: ThermalConductivity,
}

/// Evaluates the static bed conductivity for typed inputs.
pub(crate) fn static_conductivity(
    inputs: &StaticBedInputs,
) -> Result<BedConductivity, BedConductivityError> {
    inputs.validate()?;

    let k_f = inputs.fluid_conductivity.get::<watt_per_meter_kelvin>();
    let kappa = (inputs.solid_conductivity / inputs.fluid_conductivity).get::<ratio>();
    let lambda_ratio = static_ratio(
        inputs.void_fraction.get::<ratio>(),
        kappa,
        inputs.shape_factor,
    )?;

    Ok(BedConductivity {
        lambda_ratio,
        effective_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
            k_f * lambda_ratio,
        ),
    })
}

/// Evaluates `λ/λ_f` from plain numbers, guarding every singular step.
pub(crate) fn static_ratio(
    void_fraction: f64,
    conductivity_ratio: f64,
    shape_factor: f64,
) -> Result<f64, BedConductivityError> {
    let void_fraction = fraction(void_fraction, "void fraction")?;
    let kappa = positive(conductivity_ratio, "conductivity ratio")?;
    let b = positive(shape_factor, "shape factor")?;

    let delta = 1.0 - b / kappa;
    if delta.abs() < NEAR_ZERO {
        return Err(DomainError::NearSingular("ZBS shape term").into());
    }
    let ln_ratio = guard::ln(kappa / b, "ZBS conductivity ratio")?;
    let root = (1.0 - void_fraction).sqrt();

    let term_a = (1.0 - 1.0 / kappa) * b / delta.powi(2) * ln_ratio;
    let term_b = (b - 1.0) / delta;
    let term_c = (b + 1.0) / 2.0;
    let bracket = 2.0 / delta * (term_a - term_b - term_c);

    let lambda_ratio = (1.0 - root) + root * bracket;
    debug!("zbs static: eps={void_fraction}, kappa={kappa}, b={b}, ratio={lambda_ratio}");
    Ok(lambda_ratio)
}
