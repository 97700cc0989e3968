//! Plain-number entry points.
//!
//! These functions accept SI values as `f64` (with pipe roughness in
//! millimeters) and forward to the typed models. They suit callers that
//! parse user-entered text and only need numbers back.

use twine_core::Model;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, Velocity},
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::{
    models::{
        flow::pipe::{
            Fitting, FrictionResult, PipeFlow, PipeFriction, PipePressureDrop, PipeSegment,
            PressureDrop,
        },
        thermal::{
            bed::{
                self, BedConductivityError, RadiationParameters, RadiativeBedConductivity,
                RadiativeBedInputs, ZbsRadiative,
            },
            wall::{WallHeatTransfer, WallModel, WallModelConfig, WallTransferInputs, WallTransferResult},
        },
    },
    support::{
        bessel,
        guard::InputError,
    },
};

/// Darcy friction factor for flow in a circular pipe.
///
/// # Errors
///
/// Returns an [`InputError`] if the diameter, velocity, density, or viscosity
/// is not finite and strictly positive, or if the roughness is negative or
/// not finite.
///
/// # Example
///
/// ```
/// use packed_bed_models::functional::friction_factor;
///
/// let result = friction_factor(0.025, 0.045, 1.0, 1.225, 1.81e-5).unwrap();
/// assert_eq!(result.regime.name(), "laminar");
/// ```
pub fn friction_factor(
    diameter_m: f64,
    roughness_mm: f64,
    velocity_m_s: f64,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
) -> Result<FrictionResult, InputError> {
    let flow = pipe_flow(
        diameter_m,
        roughness_mm,
        velocity_m_s,
        density_kg_m3,
        viscosity_pa_s,
    )?;
    let Ok(result) = PipeFriction::default().call(&flow);
    Ok(result)
}

/// Major and local pressure drop over a straight pipe with an optional fitting.
///
/// # Errors
///
/// Returns an [`InputError`] for the same conditions as [`friction_factor`],
/// or if the length or fitting geometry is invalid.
pub fn pipe_pressure_drop(
    diameter_m: f64,
    length_m: f64,
    roughness_mm: f64,
    velocity_m_s: f64,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
    fitting: Option<Fitting>,
) -> Result<PressureDrop, InputError> {
    let flow = pipe_flow(
        diameter_m,
        roughness_mm,
        velocity_m_s,
        density_kg_m3,
        viscosity_pa_s,
    )?;
    let segment = PipeSegment::new(flow, Length::new::<meter>(length_m), fitting)?;
    let Ok(drop) = PipePressureDrop::default().call(&segment);
    Ok(drop)
}

/// Modified Bessel function `I0(x)`.
#[must_use]
pub fn bessel_i0(x: f64) -> f64 {
    bessel::i0(x)
}

/// Modified Bessel function `I1(x)`.
#[must_use]
pub fn bessel_i1(x: f64) -> f64 {
    bessel::i1(x)
}

/// Overall wall heat transfer coefficient with the default configuration.
///
/// # Errors
///
/// Returns a [`WallTransferError`](crate::models::thermal::wall::WallTransferError)
/// carrying the intermediates computed before the failure.
pub fn wall_heat_transfer(inputs: &WallTransferInputs, model: WallModel) -> WallTransferResult {
    WallHeatTransfer {
        model,
        config: WallModelConfig::default(),
    }
    .call(inputs)
}

/// Static bed conductivity relative to the fluid, `λ_bed / λ_fluid`.
///
/// # Errors
///
/// Returns [`BedConductivityError::Input`] if the void fraction is outside
/// `(0, 1)` or the conductivity ratio or shape factor is not finite and
/// strictly positive. Returns [`BedConductivityError::Domain`] if the
/// conductivity ratio is within `1e-9` (relative) of the shape factor.
///
/// # Example
///
/// ```
/// use packed_bed_models::{
///     functional::zbs_static_conductivity,
///     models::thermal::bed::BedConductivityError,
///     support::guard::DomainError,
/// };
///
/// let lambda = zbs_static_conductivity(0.4, 778.0, 1.25).unwrap();
/// assert!(lambda > 10.0);
///
/// assert_eq!(
///     zbs_static_conductivity(0.4, 1.25, 1.25),
///     Err(BedConductivityError::Domain(DomainError::NearSingular("ZBS shape term"))),
/// );
/// assert!(matches!(
///     zbs_static_conductivity(-0.5, 778.0, 1.25),
///     Err(BedConductivityError::Input(_)),
/// ));
/// ```
pub fn zbs_static_conductivity(
    void_fraction: f64,
    conductivity_ratio: f64,
    shape_factor: f64,
) -> Result<f64, BedConductivityError> {
    bed::static_ratio(void_fraction, conductivity_ratio, shape_factor)
}

/// Static bed conductivity including radiation and gas rarefaction.
///
/// # Errors
///
/// Returns a [`BedConductivityError`] if an input is invalid or a guarded
/// step of the correlation is outside its domain.
pub fn zbs_radiative_conductivity(
    inputs: &RadiativeBedInputs,
    params: RadiationParameters,
) -> Result<RadiativeBedConductivity, BedConductivityError> {
    ZbsRadiative { params }.call(inputs)
}

fn pipe_flow(
    diameter_m: f64,
    roughness_mm: f64,
    velocity_m_s: f64,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
) -> Result<PipeFlow, InputError> {
    PipeFlow::new(
        Length::new::<meter>(diameter_m),
        Length::new::<millimeter>(roughness_mm),
        Velocity::new::<meter_per_second>(velocity_m_s),
        MassDensity::new::<kilogram_per_cubic_meter>(density_kg_m3),
        DynamicViscosity::new::<pascal_second>(viscosity_pa_s),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::{Angle, Ratio, SpecificHeatCapacity, ThermalConductivity},
        heat_transfer::watt_per_square_meter_kelvin,
        pressure::pascal,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::{
        models::{flow::pipe::FlowRegime, thermal::wall::OverallCoefficient},
        support::{constraint::ConstraintError, guard::DomainError},
    };

    #[test]
    fn laminar_air_through_a_small_tube() {
        let drop = pipe_pressure_drop(0.025, 1.0, 0.045, 1.0, 1.225, 1.81e-5, None).unwrap();

        assert_eq!(drop.friction.regime, FlowRegime::Laminar);
        assert_relative_eq!(drop.friction.reynolds, 1692.0, max_relative = 1e-3);
        assert_eq!(drop.friction.friction_factor, 64.0 / drop.friction.reynolds);
        assert_relative_eq!(drop.friction.friction_factor, 0.0378, max_relative = 1e-3);
        assert_relative_eq!(drop.total.get::<pascal>(), 0.927, max_relative = 1e-3);
    }

    #[test]
    fn colebrook_reference_value() {
        // Re = 4000 with ε/D = 0.0002: D = 0.025 m, roughness = 0.005 mm.
        let velocity = 4000.0 * 1.81e-5 / (1.225 * 0.025);
        let result = friction_factor(0.025, 0.005, velocity, 1.225, 1.81e-5).unwrap();

        assert_relative_eq!(result.reynolds, 4000.0, max_relative = 1e-12);
        assert_relative_eq!(result.relative_roughness, 0.0002, max_relative = 1e-12);
        assert!(result.iteration.is_some_and(|report| report.is_converged()));
        assert_relative_eq!(result.friction_factor, 0.0401, max_relative = 5e-3);
    }

    #[test]
    fn friction_factor_rejects_invalid_inputs() {
        let err = friction_factor(0.025, 0.045, 0.0, 1.225, 1.81e-5).unwrap_err();
        assert_eq!(err.quantity, "velocity");
        assert_eq!(err.source, ConstraintError::Zero);

        let err = friction_factor(0.025, 0.045, 1.0, f64::NAN, 1.81e-5).unwrap_err();
        assert_eq!(err.quantity, "density");
        assert_eq!(err.source, ConstraintError::NotANumber);
    }

    #[test]
    fn friction_factor_rejects_degenerate_reynolds_numbers() {
        let err = friction_factor(0.025, 0.045, 1e-200, 1e-200, 1.81e-5).unwrap_err();
        assert_eq!(err.quantity, "reynolds number");
        assert_eq!(err.source, ConstraintError::Zero);

        let err = friction_factor(0.025, 0.0, 1e200, 1e200, 1.81e-5).unwrap_err();
        assert_eq!(err.quantity, "reynolds number");
        assert_eq!(err.source, ConstraintError::Infinite);
    }

    #[test]
    fn elbow_on_a_turbulent_water_line() {
        let elbow = Fitting::Elbow {
            angle: Angle::new::<degree>(90.0),
            bend_radius: Length::new::<meter>(0.1),
        };
        let drop = pipe_pressure_drop(0.05, 10.0, 0.005, 2.0, 1000.0, 1e-3, Some(elbow)).unwrap();

        // r/D = 2 sits on a chart point.
        assert_relative_eq!(drop.loss_coefficient, 0.9, epsilon = 1e-12);
        assert_relative_eq!(drop.local.get::<pascal>(), 0.9 * 2000.0, max_relative = 1e-12);
    }

    #[test]
    fn bessel_defining_values() {
        assert_eq!(bessel_i0(0.0), 1.0);
        assert_eq!(bessel_i1(0.0), 0.0);
        assert_eq!(bessel_i0(-3.0), bessel_i0(3.0));
        assert_eq!(bessel_i1(-3.0), -bessel_i1(3.0));
    }

    #[test]
    fn approximate_wall_model_overestimates_when_ratio_exceeds_one_half() {
        let inputs = WallTransferInputs {
            velocity: Velocity::new::<meter_per_second>(1.0),
            particle_diameter: Length::new::<meter>(0.006),
            tube_diameter: Length::new::<meter>(0.05),
            void_fraction: Ratio::new::<ratio>(0.4),
            fluid_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0257),
            solid_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(20.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            viscosity: DynamicViscosity::new::<pascal_second>(1.81e-5),
            heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
        };

        let complete = wall_heat_transfer(&inputs, WallModel::Complete);
        let approximate = wall_heat_transfer(&inputs, WallModel::Approximate);

        let u_complete = complete.overall_u_or_nan().get::<watt_per_square_meter_kelvin>();
        let u_approximate = approximate.overall_u_or_nan().get::<watt_per_square_meter_kelvin>();
        assert!(u_complete > 0.0 && u_approximate > u_complete);
        assert!(complete.unwrap().bessel_ratio.unwrap() > 0.5);
    }

    #[test]
    fn zbs_static_reference_case() {
        let lambda = zbs_static_conductivity(0.4, 20.0 / 0.0257, 1.25).unwrap();
        assert!(lambda.is_finite() && lambda > 0.0);
        assert_relative_eq!(lambda, 10.594_457, max_relative = 1e-6);

        assert_eq!(
            zbs_static_conductivity(0.4, 1.25, 1.25),
            Err(BedConductivityError::Domain(DomainError::NearSingular(
                "ZBS shape term"
            )))
        );
    }

    #[test]
    fn zbs_static_rejects_out_of_range_inputs() {
        for (eps, kappa, b, quantity) in [
            (-0.5, 778.0, 1.25, "void fraction"),
            (0.0, 778.0, 1.25, "void fraction"),
            (1.0, 778.0, 1.25, "void fraction"),
            (0.4, -5.0, -1.25, "conductivity ratio"),
            (0.4, 0.0, 1.25, "conductivity ratio"),
            (0.4, 778.0, 0.0, "shape factor"),
            (0.4, 778.0, f64::INFINITY, "shape factor"),
        ] {
            assert!(
                matches!(
                    zbs_static_conductivity(eps, kappa, b),
                    Err(BedConductivityError::Input(e)) if e.quantity == quantity
                ),
                "({eps}, {kappa}, {b}) should be rejected as an invalid {quantity}"
            );
        }
    }
}
