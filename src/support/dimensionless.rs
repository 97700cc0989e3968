//! Dimensionless groups for flow and transport in packed beds.
//!
//! Each group is computed from typed [`uom`] quantities so the dimensional
//! bookkeeping is checked at compile time, then returned as a plain `f64`.
//!
//! - Reynolds, `Re = ρ u L / μ`
//! - Prandtl, `Pr = c_p μ / k`
//! - Schmidt, `Sc = μ / (ρ D_AB)`
//! - Péclet, thermal `Pe = Re · Pr` and mass `Pe_m = Re · Sc`

use uom::si::{
    f64::{
        DiffusionCoefficient, DynamicViscosity, Length, MassDensity, SpecificHeatCapacity,
        ThermalConductivity, Velocity,
    },
    ratio::ratio,
};

use crate::support::guard::{InputError, positive};

/// Reynolds number `ρ u L / μ` for a characteristic length `L`.
#[must_use]
pub fn reynolds(
    density: MassDensity,
    velocity: Velocity,
    length: Length,
    viscosity: DynamicViscosity,
) -> f64 {
    (density * velocity * length / viscosity).get::<ratio>()
}

/// Prandtl number `c_p μ / k`.
#[must_use]
pub fn prandtl(
    heat_capacity: SpecificHeatCapacity,
    viscosity: DynamicViscosity,
    conductivity: ThermalConductivity,
) -> f64 {
    (heat_capacity * viscosity / conductivity).get::<ratio>()
}

/// Schmidt number `μ / (ρ D_AB)`.
///
/// # Example
///
/// ```
/// use packed_bed_models::support::dimensionless::schmidt;
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second,
///     dynamic_viscosity::pascal_second,
///     f64::{DiffusionCoefficient, DynamicViscosity, MassDensity},
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let sc = schmidt(
///     DynamicViscosity::new::<pascal_second>(1.81e-5),
///     MassDensity::new::<kilogram_per_cubic_meter>(1.225),
///     DiffusionCoefficient::new::<square_meter_per_second>(2.0e-5),
/// );
/// assert!((sc - 0.7388).abs() < 1e-4);
/// ```
#[must_use]
pub fn schmidt(
    viscosity: DynamicViscosity,
    density: MassDensity,
    diffusivity: DiffusionCoefficient,
) -> f64 {
    (viscosity / (density * diffusivity)).get::<ratio>()
}

/// Péclet number as the product of a Reynolds number and a Prandtl or
/// Schmidt number.
#[must_use]
pub fn peclet(reynolds: f64, diffusive_group: f64) -> f64 {
    reynolds * diffusive_group
}

/// A validated snapshot of the fluid and flow properties that define the
/// dimensionless groups.
#[derive(Debug, Clone, Copy)]
pub struct TransportConditions {
    velocity: Velocity,
    length: Length,
    density: MassDensity,
    viscosity: DynamicViscosity,
    conductivity: ThermalConductivity,
    heat_capacity: SpecificHeatCapacity,
    diffusivity: DiffusionCoefficient,
}

impl TransportConditions {
    /// Constructs validated transport conditions.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first property that is not
    /// finite and strictly positive.
    pub fn new(
        velocity: Velocity,
        length: Length,
        density: MassDensity,
        viscosity: DynamicViscosity,
        conductivity: ThermalConductivity,
        heat_capacity: SpecificHeatCapacity,
        diffusivity: DiffusionCoefficient,
    ) -> Result<Self, InputError> {
        Ok(Self {
            velocity: positive(velocity, "velocity")?,
            length: positive(length, "characteristic length")?,
            density: positive(density, "density")?,
            viscosity: positive(viscosity, "viscosity")?,
            conductivity: positive(conductivity, "thermal conductivity")?,
            heat_capacity: positive(heat_capacity, "heat capacity")?,
            diffusivity: positive(diffusivity, "mass diffusivity")?,
        })
    }

    /// Computes every dimensionless group for these conditions.
    #[must_use]
    pub fn dimensionless(&self) -> DimensionlessSet {
        let re = reynolds(self.density, self.velocity, self.length, self.viscosity);
        let pr = prandtl(self.heat_capacity, self.viscosity, self.conductivity);
        let sc = schmidt(self.viscosity, self.density, self.diffusivity);
        DimensionlessSet {
            reynolds: re,
            prandtl: pr,
            schmidt: sc,
            peclet: peclet(re, pr),
            peclet_mass: peclet(re, sc),
        }
    }
}

/// The dimensionless groups for one set of transport conditions.
///
/// Recomputed on every call from a [`TransportConditions`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionlessSet {
    pub reynolds: f64,
    pub prandtl: f64,
    pub schmidt: f64,

    /// Thermal Péclet number, `Re · Pr`.
    pub peclet: f64,

    /// Mass-transfer Péclet number, `Re · Sc`.
    pub peclet_mass: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, dynamic_viscosity::pascal_second,
        length::meter, mass_density::kilogram_per_cubic_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin, velocity::meter_per_second,
    };

    use crate::support::constraint::ConstraintError;

    fn air() -> TransportConditions {
        TransportConditions::new(
            Velocity::new::<meter_per_second>(1.0),
            Length::new::<meter>(0.025),
            MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            DynamicViscosity::new::<pascal_second>(1.81e-5),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0257),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            DiffusionCoefficient::new::<square_meter_per_second>(2.0e-5),
        )
        .expect("air properties are valid")
    }

    #[test]
    fn reynolds_for_air_in_a_small_tube() {
        let set = air().dimensionless();
        assert_relative_eq!(set.reynolds, 1.225 * 0.025 / 1.81e-5, max_relative = 1e-12);
        assert_relative_eq!(set.reynolds, 1691.99, max_relative = 1e-5);
    }

    #[test]
    fn prandtl_and_schmidt_for_air() {
        let set = air().dimensionless();
        assert_relative_eq!(set.prandtl, 1005.0 * 1.81e-5 / 0.0257, max_relative = 1e-12);
        assert_relative_eq!(set.schmidt, 1.81e-5 / (1.225 * 2.0e-5), max_relative = 1e-12);
    }

    #[test]
    fn peclet_numbers_are_products() {
        let set = air().dimensionless();
        assert_relative_eq!(set.peclet, set.reynolds * set.prandtl);
        assert_relative_eq!(set.peclet_mass, set.reynolds * set.schmidt);
    }

    #[test]
    fn rejects_non_positive_properties() {
        let err = TransportConditions::new(
            Velocity::new::<meter_per_second>(1.0),
            Length::new::<meter>(0.025),
            MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            DynamicViscosity::new::<pascal_second>(0.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0257),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            DiffusionCoefficient::new::<square_meter_per_second>(2.0e-5),
        )
        .unwrap_err();

        assert_eq!(err.quantity, "viscosity");
        assert_eq!(err.source, ConstraintError::Zero);
    }
}
