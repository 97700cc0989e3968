//! Validated inputs for pipe flow and pipe segments.

use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Pressure, Velocity},
    ratio::ratio,
};

use crate::support::{
    dimensionless,
    guard::{InputError, non_negative, positive},
};

use super::Fitting;

/// Fully developed flow of a Newtonian fluid through a circular pipe.
///
/// All quantities are checked at construction: the diameter, velocity,
/// density, and viscosity must be finite and strictly positive, and the
/// wall roughness must be finite and non-negative. The derived Reynolds
/// number must also be finite and strictly positive, and the relative
/// roughness finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlow {
    diameter: Length,
    roughness: Length,
    velocity: Velocity,
    density: MassDensity,
    viscosity: DynamicViscosity,
}

impl PipeFlow {
    /// Creates a validated pipe flow.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first invalid quantity, or naming
    /// the Reynolds number or relative roughness if the inputs are valid on
    /// their own but their combination underflows or overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use packed_bed_models::models::flow::pipe::PipeFlow;
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
    /// assert!((flow.reynolds() - 1691.99).abs() < 0.01);
    /// ```
    pub fn new(
        diameter: Length,
        roughness: Length,
        velocity: Velocity,
        density: MassDensity,
        viscosity: DynamicViscosity,
    ) -> Result<Self, InputError> {
        let flow = Self {
            diameter: positive(diameter, "pipe diameter")?,
            roughness: non_negative(roughness, "wall roughness")?,
            velocity: positive(velocity, "velocity")?,
            density: positive(density, "density")?,
            viscosity: positive(viscosity, "viscosity")?,
        };
        positive(flow.reynolds(), "reynolds number")?;
        non_negative(flow.relative_roughness(), "relative roughness")?;
        Ok(flow)
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    #[must_use]
    pub fn roughness(&self) -> Length {
        self.roughness
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }

    /// Reynolds number based on the pipe diameter.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        dimensionless::reynolds(self.density, self.velocity, self.diameter, self.viscosity)
    }

    /// Wall roughness divided by pipe diameter.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        (self.roughness / self.diameter).get::<ratio>()
    }

    /// Dynamic pressure `ρ u² / 2`.
    #[must_use]
    pub fn dynamic_pressure(&self) -> Pressure {
        self.density * self.velocity * self.velocity * 0.5
    }
}

/// A straight run of pipe with an optional fitting at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSegment {
    flow: PipeFlow,
    length: Length,
    fitting: Option<Fitting>,
}

impl PipeSegment {
    /// Creates a validated pipe segment.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the length is not finite and strictly
    /// positive, or if the fitting geometry is invalid.
    pub fn new(flow: PipeFlow, length: Length, fitting: Option<Fitting>) -> Result<Self, InputError> {
        if let Some(fitting) = &fitting {
            fitting.validate()?;
        }
        Ok(Self {
            flow,
            length: positive(length, "pipe length")?,
            fitting,
        })
    }

    #[must_use]
    pub fn flow(&self) -> &PipeFlow {
        &self.flow
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn fitting(&self) -> Option<&Fitting> {
        self.fitting.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree, dynamic_viscosity::pascal_second, f64::Angle, length::{meter, millimeter},
        mass_density::kilogram_per_cubic_meter, pressure::pascal, velocity::meter_per_second,
    };

    use crate::support::constraint::ConstraintError;

    fn flow(diameter: f64, roughness_mm: f64) -> Result<PipeFlow, InputError> {
        PipeFlow::new(
            Length::new::<meter>(diameter),
            Length::new::<millimeter>(roughness_mm),
            Velocity::new::<meter_per_second>(1.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            DynamicViscosity::new::<pascal_second>(1.81e-5),
        )
    }

    #[test]
    fn derived_quantities() -> Result<(), InputError> {
        let flow = flow(0.025, 0.045)?;

        assert_relative_eq!(flow.reynolds(), 1.225 * 0.025 / 1.81e-5, max_relative = 1e-12);
        assert_relative_eq!(flow.relative_roughness(), 0.0018, max_relative = 1e-12);
        assert_relative_eq!(flow.dynamic_pressure().get::<pascal>(), 0.6125, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn smooth_wall_is_allowed() -> Result<(), InputError> {
        assert_eq!(flow(0.025, 0.0)?.relative_roughness(), 0.0);
        Ok(())
    }

    #[test]
    fn rejects_invalid_flow() {
        let err = flow(0.0, 0.045).unwrap_err();
        assert_eq!(err.quantity, "pipe diameter");
        assert_eq!(err.source, ConstraintError::Zero);

        let err = flow(0.025, -0.1).unwrap_err();
        assert_eq!(err.quantity, "wall roughness");
        assert_eq!(err.source, ConstraintError::Negative);

        let err = flow(f64::NAN, 0.045).unwrap_err();
        assert_eq!(err.source, ConstraintError::NotANumber);

        let err = flow(f64::INFINITY, 0.045).unwrap_err();
        assert_eq!(err.source, ConstraintError::Infinite);
    }

    fn flow_with(velocity: f64, density: f64, roughness_mm: f64) -> Result<PipeFlow, InputError> {
        PipeFlow::new(
            Length::new::<meter>(0.025),
            Length::new::<millimeter>(roughness_mm),
            Velocity::new::<meter_per_second>(velocity),
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            DynamicViscosity::new::<pascal_second>(1.81e-5),
        )
    }

    #[test]
    fn rejects_reynolds_number_that_underflows_or_overflows() {
        let err = flow_with(1e-200, 1e-200, 0.045).unwrap_err();
        assert_eq!(err.quantity, "reynolds number");
        assert_eq!(err.source, ConstraintError::Zero);

        let err = flow_with(1e200, 1e200, 0.0).unwrap_err();
        assert_eq!(err.quantity, "reynolds number");
        assert_eq!(err.source, ConstraintError::Infinite);
    }

    #[test]
    fn rejects_relative_roughness_that_overflows() {
        let err = PipeFlow::new(
            Length::new::<meter>(1e-300),
            Length::new::<meter>(1e300),
            Velocity::new::<meter_per_second>(1.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            DynamicViscosity::new::<pascal_second>(1.81e-5),
        )
        .unwrap_err();
        assert_eq!(err.quantity, "relative roughness");
        assert_eq!(err.source, ConstraintError::Infinite);
    }

    #[test]
    fn segment_validates_length_and_fitting() -> Result<(), InputError> {
        let flow = flow(0.025, 0.045)?;

        let err = PipeSegment::new(flow, Length::new::<meter>(-1.0), None).unwrap_err();
        assert_eq!(err.quantity, "pipe length");

        let elbow = Fitting::Elbow {
            angle: Angle::new::<degree>(190.0),
            bend_radius: Length::new::<meter>(0.05),
        };
        let err = PipeSegment::new(flow, Length::new::<meter>(1.0), Some(elbow)).unwrap_err();
        assert_eq!(err.quantity, "elbow angle");
        assert_eq!(err.source, ConstraintError::AboveMaximum);

        let segment = PipeSegment::new(flow, Length::new::<meter>(1.0), None)?;
        assert!(segment.fitting().is_none());
        Ok(())
    }
}
