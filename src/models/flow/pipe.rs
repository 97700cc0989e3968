//! Pipe flow models.
//!
//! This module provides [`twine_core::Model`] implementations for friction
//! factor and pressure drop in circular pipes.
//! The computational core is in the internal `core` module.

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    ColebrookConfig, Fitting, FlowRegime, FrictionResult, IterationReport, PipeFlow,
    PipeSegment, PressureDrop, Status, TurbulentFormula,
};

/// Darcy friction factor for a validated [`PipeFlow`].
///
/// Evaluation cannot fail once the flow has been constructed. Colebrook–White
/// non-convergence is reported through [`FrictionResult::iteration`].
///
/// # Example
///
/// ```
/// use packed_bed_models::models::flow::pipe::{FlowRegime, PipeFlow, PipeFriction};
/// use twine_core::Model;
/// use uom::si::{
///     dynamic_viscosity::pascal_second,
///     f64::{DynamicViscosity, Length, MassDensity, Velocity},
///     length::{meter, millimeter},
///     mass_density::kilogram_per_cubic_meter,
///     velocity::meter_per_second,
/// };
///
/// let flow = PipeFlow::new(
///     Length::new::<meter>(0.025),
///     Length::new::<millimeter>(0.045),
///     Velocity::new::<meter_per_second>(1.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1.225),
///     DynamicViscosity::new::<pascal_second>(1.81e-5),
/// )
/// .unwrap();
///
/// let result = PipeFriction::default().call(&flow).unwrap();
/// assert_eq!(result.regime, FlowRegime::Laminar);
/// assert_eq!(result.friction_factor, 64.0 / result.reynolds);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeFriction {
    pub config: ColebrookConfig,
}

impl Model for PipeFriction {
    type Input = PipeFlow;
    type Output = FrictionResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::friction(input, &self.config))
    }
}

/// Major and local pressure drop over a validated [`PipeSegment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PipePressureDrop {
    pub config: ColebrookConfig,
}

impl Model for PipePressureDrop {
    type Input = PipeSegment;
    type Output = PressureDrop;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::pressure_drop(input, &self.config))
    }
}
