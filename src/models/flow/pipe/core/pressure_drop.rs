//! Darcy–Weisbach pressure drop with local fitting losses.

use log::debug;
use uom::si::{
    f64::{Length, Pressure},
    pressure::pascal,
    ratio::ratio,
};

use super::{ColebrookConfig, FrictionResult, PipeSegment, friction};

/// Pressure drop over a pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureDrop {
    /// The friction factor used for the major loss.
    pub friction: FrictionResult,

    /// Loss coefficient of the fitting, or zero without one.
    pub loss_coefficient: f64,

    /// Frictional loss along the straight run, `f (L/D) ρ u² / 2`.
    pub major: Pressure,

    /// Fitting loss, `K ρ u² / 2`.
    pub local: Pressure,

    /// Sum of the major and local losses.
    pub total: Pressure,
}

/// Darcy–Weisbach major loss `f (L/D) q` for a dynamic pressure `q`.
pub(crate) fn darcy_weisbach(
    friction_factor: f64,
    length: Length,
    diameter: Length,
    dynamic_pressure: Pressure,
) -> Pressure {
    dynamic_pressure * (friction_factor * (length / diameter).get::<ratio>())
}

/// Evaluates the pressure drop over a validated segment.
pub(crate) fn pressure_drop(segment: &PipeSegment, config: &ColebrookConfig) -> PressureDrop {
    let flow = segment.flow();
    let friction = friction(flow, config);
    let dynamic_pressure = flow.dynamic_pressure();

    let major = darcy_weisbach(
        friction.friction_factor,
        segment.length(),
        flow.diameter(),
        dynamic_pressure,
    );

    let loss_coefficient = segment
        .fitting()
        .map_or(0.0, |fitting| fitting.loss_coefficient(flow.diameter()));
    let local = dynamic_pressure * loss_coefficient;
    let total = major + local;

    debug!(
        "pressure drop: major={} Pa, local={} Pa, k={loss_coefficient}",
        major.get::<pascal>(),
        local.get::<pascal>()
    );

    PressureDrop {
        friction,
        loss_coefficient,
        major,
        local,
        total,
    }
}
