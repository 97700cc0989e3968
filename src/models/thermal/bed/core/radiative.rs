//! Static bed conductivity with thermal radiation and gas rarefaction.
//!
//! Extends the Zehner–Bauer–Schlünder model with a radiative conductance
//! between particle surfaces, a Smoluchowski-type correction `k_G` for the
//! reduced gas conductivity in narrow gaps, and a flattened-contact fraction
//! `φ` through which heat conducts solid to solid. The shape factor follows
//! from the void fraction, `B = 1.25 ((1-ε)/ε)^(10/9)`.

use std::f64::consts::PI;

use log::debug;
use uom::si::{
    f64::ThermalConductivity, length::meter, molar_mass::kilogram_per_mole, pressure::pascal,
    ratio::ratio, specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::kelvin,
};

use crate::support::guard::{self, DomainError};

use super::{BedConductivityError, RadiationParameters, RadiativeBedInputs, SPHERE_SHAPE_FACTOR};

/// Stefan–Boltzmann constant, W/(m²·K⁴).
const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Molar gas constant, J/(mol·K).
const GAS_CONSTANT: f64 = 8.314;

/// Radiative bed conductivity with the terms that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiativeBedConductivity {
    /// `λ_bed / λ_fluid`.
    pub lambda_ratio: f64,
    pub effective_conductivity: ThermalConductivity,

    /// Shape factor `B` derived from the void fraction.
    pub shape_factor: f64,

    /// Radiative conductance relative to the fluid, `k_r`.
    pub radiation: f64,

    /// Modified mean free path of the gas, `ℓ`.
    pub mean_free_path: f64,

    /// Gas conductivity reduction in the particle gaps, `k_G`.
    pub gas_factor: f64,

    /// Combined shape term `N`.
    pub shape_term: f64,

    /// Conductance of the particle core cell relative to the fluid, `k_c`.
    pub core_conductance: f64,
}

/// Evaluates the radiative bed conductivity for typed inputs.
pub(crate) fn radiative_conductivity(
    inputs: &RadiativeBedInputs,
    params: &RadiationParameters,
) -> Result<RadiativeBedConductivity, BedConductivityError> {
    inputs.validate()?;
    params.validate()?;

    let eps = inputs.void_fraction.get::<ratio>();
    let k_f = inputs.fluid_conductivity.get::<watt_per_meter_kelvin>();
    let kappa = (inputs.solid_conductivity / inputs.fluid_conductivity).get::<ratio>();
    let d_p = inputs.particle_diameter.get::<meter>();
    let t = inputs.temperature.get::<kelvin>();
    let p = inputs.pressure.get::<pascal>();
    let m = inputs.molar_mass.get::<kilogram_per_mole>();
    let c_p = inputs.heat_capacity.get::<joule_per_kilogram_kelvin>();

    let b = SPHERE_SHAPE_FACTOR * ((1.0 - eps) / eps).powf(10.0 / 9.0);

    let emission = guard::div(1.0, 2.0 / params.emissivity - 1.0, "ZBS emissivity term")?;
    let k_r = 4.0 * STEFAN_BOLTZMANN * t.powi(3) * d_p * emission / k_f;

    let a = params.accommodation;
    let gas_capacity = guard::div(1.0, 2.0 * c_p - GAS_CONSTANT / m, "ZBS gas heat capacity")?;
    let mean_free_path =
        2.0 * (2.0 - a) / a * (2.0 * PI * GAS_CONSTANT * t / m).sqrt() * k_f * gas_capacity / p;
    let k_g = 1.0 / (1.0 + mean_free_path / d_p);

    let n = 1.0 / k_g * (1.0 + (k_r - b * k_g) / kappa) - b * (1.0 / k_g - 1.0) * (1.0 + k_r / kappa);
    let inv_n = guard::div(1.0, n, "ZBS radiative shape term")?;

    let ln_term = guard::ln(
        (kappa + k_r) / (b * (k_g + (1.0 - k_g) * (kappa + k_r))),
        "ZBS radiative logarithm",
    )?;
    let k_c = 2.0
        * inv_n
        * (b * (kappa + k_r - 1.0) * inv_n.powi(2) / (k_g * kappa) * ln_term
            + (b + 1.0) / (2.0 * b) * (k_r / k_g - b * (1.0 + (1.0 - k_g) / k_g * k_r))
            - (b - 1.0) * inv_n / k_g);

    let gas_path = guard::div(1.0, eps - 1.0 + 1.0 / k_g, "ZBS gas path")?;
    let root = guard::sqrt(1.0 - eps, "ZBS solid fraction")?;
    let phi = params.contact_fraction;

    let lambda_ratio = (1.0 - root) * eps * (gas_path + k_r)
        + root * (phi * kappa + (1.0 - phi) * k_c);
    if !lambda_ratio.is_finite() {
        return Err(DomainError::DivisionByNearZero("ZBS radiative result").into());
    }

    debug!(
        "zbs radiative: b={b}, k_r={k_r}, k_g={k_g}, n={n}, k_c={k_c}, ratio={lambda_ratio}"
    );

    Ok(RadiativeBedConductivity {
        lambda_ratio,
        effective_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
            k_f * lambda_ratio,
        ),
        shape_factor: b,
        radiation: k_r,
        mean_free_path,
        gas_factor: k_g,
        shape_term: n,
        core_conductance: k_c,
    })
}
