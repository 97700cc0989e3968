//! Packed bed conductivity models.
//!
//! This module provides [`twine_core::Model`] implementations for the
//! effective thermal conductivity of a packed bed without flow.
//! The computational core is in the internal `core` module.

mod core;

use twine_core::Model;

pub use self::core::{
    BedConductivity, BedConductivityError, RadiationParameters, RadiativeBedConductivity,
    RadiativeBedInputs, SPHERE_SHAPE_FACTOR, StaticBedInputs,
};

pub(crate) use self::core::static_ratio;

/// Static bed conductivity from the Zehner–Bauer–Schlünder model.
///
/// # Example
///
/// ```
/// use packed_bed_models::models::thermal::bed::{StaticBedInputs, ZbsStatic};
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Ratio, ThermalConductivity},
///     ratio::ratio,
///     thermal_conductivity::watt_per_meter_kelvin,
/// };
///
/// let inputs = StaticBedInputs::spheres(
///     Ratio::new::<ratio>(0.4),
///     ThermalConductivity::new::<watt_per_meter_kelvin>(0.0257),
///     ThermalConductivity::new::<watt_per_meter_kelvin>(20.0),
/// );
///
/// let bed = ZbsStatic.call(&inputs).unwrap();
/// assert!((bed.lambda_ratio - 10.594).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ZbsStatic;

impl Model for ZbsStatic {
    type Input = StaticBedInputs;
    type Output = BedConductivity;
    type Error = BedConductivityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::static_conductivity(input)
    }
}

/// Static bed conductivity including radiation and gas rarefaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZbsRadiative {
    pub params: RadiationParameters,
}

impl Model for ZbsRadiative {
    type Input = RadiativeBedInputs;
    type Output = RadiativeBedConductivity;
    type Error = BedConductivityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::radiative_conductivity(input, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{
            Length, MolarMass, Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity,
            ThermodynamicTemperature,
        },
        length::meter,
        molar_mass::kilogram_per_mole,
        pressure::pascal,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::kelvin,
    };

    fn k(value: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(value)
    }

    #[test]
    fn static_adapter() {
        let inputs = StaticBedInputs::spheres(Ratio::new::<ratio>(0.4), k(0.0257), k(20.0));
        let bed = ZbsStatic.call(&inputs).unwrap();

        assert_relative_eq!(bed.lambda_ratio, 10.594_457, max_relative = 1e-6);
    }

    #[test]
    fn radiative_adapter_uses_its_parameters() {
        let inputs = RadiativeBedInputs {
            void_fraction: Ratio::new::<ratio>(0.4),
            fluid_conductivity: k(0.03),
            solid_conductivity: k(1.5),
            particle_diameter: Length::new::<meter>(0.003),
            temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            pressure: Pressure::new::<pascal>(101_325.0),
            molar_mass: MolarMass::new::<kilogram_per_mole>(0.029),
            heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
        };

        let default = ZbsRadiative::default().call(&inputs).unwrap();
        assert_relative_eq!(
            default.effective_conductivity.get::<watt_per_meter_kelvin>(),
            0.232_462_1,
            max_relative = 1e-6
        );

        let black = ZbsRadiative {
            params: RadiationParameters {
                emissivity: 1.0,
                ..RadiationParameters::default()
            },
        }
        .call(&inputs)
        .unwrap();
        assert_relative_eq!(black.radiation / default.radiation, 1.5, max_relative = 1e-12);
        assert!(black.lambda_ratio > default.lambda_ratio);
    }
}
