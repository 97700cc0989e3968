//! Wall heat transfer models for packed tubes.
//!
//! This module provides [`twine_core::Model`] implementations for the overall
//! bed-to-wall heat transfer coefficient.
//! The computational core is in the internal `core` module.

mod core;

use twine_core::Model;

pub use self::core::{
    OverallCoefficient, WallComparison, WallModel, WallModelConfig, WallTransfer,
    WallTransferError, WallTransferInputs, WallTransferPartial, WallTransferResult,
};

/// Overall heat transfer coefficient from a single wall model.
///
/// # Example
///
/// ```
/// use packed_bed_models::models::thermal::wall::{
///     WallHeatTransfer, WallModel, WallModelConfig, WallTransferInputs,
/// };
/// use twine_core::Model;
/// use uom::si::{
///     dynamic_viscosity::pascal_second,
///     f64::{
///         DynamicViscosity, Length, MassDensity, Ratio, SpecificHeatCapacity,
///         ThermalConductivity, Velocity,
///     },
///     heat_transfer::watt_per_square_meter_kelvin,
///     length::meter,
///     mass_density::kilogram_per_cubic_meter,
///     ratio::ratio,
///     specific_heat_capacity::joule_per_kilogram_kelvin,
///     thermal_conductivity::watt_per_meter_kelvin,
///     velocity::meter_per_second,
/// };
///
/// let inputs = WallTransferInputs {
///     velocity: Velocity::new::<meter_per_second>(1.0),
///     particle_diameter: Length::new::<meter>(0.006),
///     tube_diameter: Length::new::<meter>(0.05),
///     void_fraction: Ratio::new::<ratio>(0.4),
///     fluid_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0257),
///     solid_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(20.0),
///     density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
///     viscosity: DynamicViscosity::new::<pascal_second>(1.81e-5),
///     heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
/// };
///
/// let model = WallHeatTransfer {
///     model: WallModel::Complete,
///     config: WallModelConfig::default(),
/// };
/// let transfer = model.call(&inputs).unwrap();
///
/// assert!(transfer.bessel_ratio.is_some());
/// assert!(transfer.overall_u.get::<watt_per_square_meter_kelvin>() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WallHeatTransfer {
    pub model: WallModel,
    pub config: WallModelConfig,
}

impl Model for WallHeatTransfer {
    type Input = WallTransferInputs;
    type Output = WallTransfer;
    type Error = WallTransferError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::evaluate(input, self.model, &self.config)
    }
}

/// Complete and approximate wall models evaluated side by side.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareWallModels {
    pub config: WallModelConfig,
}

impl Model for CompareWallModels {
    type Input = WallTransferInputs;
    type Output = WallComparison;
    type Error = WallTransferError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::compare(input, &self.config)
    }
}
