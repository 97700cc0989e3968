use uom::si::{
    f64::{
        Length, MolarMass, Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::ConstraintError,
    guard::{InputError, fraction, non_negative, positive},
};

/// Shape factor `B` for beds of spheres.
pub const SPHERE_SHAPE_FACTOR: f64 = 1.25;

/// Inputs for the static (no flow, no radiation) bed conductivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticBedInputs {
    pub void_fraction: Ratio,
    pub fluid_conductivity: ThermalConductivity,
    pub solid_conductivity: ThermalConductivity,

    /// Particle shape factor `B`.
    pub shape_factor: f64,
}

impl StaticBedInputs {
    /// Inputs for a bed of spheres, with `B = 1.25`.
    #[must_use]
    pub fn spheres(
        void_fraction: Ratio,
        fluid_conductivity: ThermalConductivity,
        solid_conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            void_fraction,
            fluid_conductivity,
            solid_conductivity,
            shape_factor: SPHERE_SHAPE_FACTOR,
        }
    }

    /// Checks that the void fraction lies in `(0, 1)` and that both
    /// conductivities and the shape factor are finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first invalid property.
    pub fn validate(&self) -> Result<(), InputError> {
        fraction(self.void_fraction, "void fraction")?;
        positive(self.fluid_conductivity, "fluid thermal conductivity")?;
        positive(self.solid_conductivity, "solid thermal conductivity")?;
        positive(self.shape_factor, "shape factor")?;
        Ok(())
    }
}

/// Inputs for the static bed conductivity with radiation and gas rarefaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiativeBedInputs {
    pub void_fraction: Ratio,
    pub fluid_conductivity: ThermalConductivity,
    pub solid_conductivity: ThermalConductivity,
    pub particle_diameter: Length,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,

    /// Molar mass of the gas.
    pub molar_mass: MolarMass,

    /// Specific heat capacity of the gas.
    pub heat_capacity: SpecificHeatCapacity,
}

impl RadiativeBedInputs {
    /// Checks that the void fraction lies in `(0, 1)` and that every other
    /// property is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first invalid property.
    pub fn validate(&self) -> Result<(), InputError> {
        fraction(self.void_fraction, "void fraction")?;
        positive(self.fluid_conductivity, "fluid thermal conductivity")?;
        positive(self.solid_conductivity, "solid thermal conductivity")?;
        positive(self.particle_diameter, "particle diameter")?;
        positive(self.temperature.get::<kelvin>(), "temperature")?;
        positive(self.pressure, "pressure")?;
        positive(self.molar_mass, "molar mass")?;
        positive(self.heat_capacity, "heat capacity")?;
        Ok(())
    }
}

/// Surface and contact properties used by the radiative model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationParameters {
    /// Emissivity of the particle surface, in `(0, 1]`.
    pub emissivity: f64,

    /// Fraction `φ` of the cross-section conducting through particle contacts,
    /// in `[0, 1]`.
    pub contact_fraction: f64,

    /// Thermal accommodation coefficient of the gas on the particle surface,
    /// in `(0, 1]`.
    pub accommodation: f64,
}

impl Default for RadiationParameters {
    fn default() -> Self {
        Self {
            emissivity: 0.8,
            contact_fraction: 0.0077,
            accommodation: 1.0,
        }
    }
}

impl RadiationParameters {
    /// Checks each parameter against its physical range.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first parameter out of range.
    pub fn validate(&self) -> Result<(), InputError> {
        at_most_one(positive(self.emissivity, "emissivity")?, "emissivity")?;
        at_most_one(
            non_negative(self.contact_fraction, "contact fraction")?,
            "contact fraction",
        )?;
        at_most_one(
            positive(self.accommodation, "accommodation coefficient")?,
            "accommodation coefficient",
        )?;
        Ok(())
    }
}

fn at_most_one(value: f64, quantity: &'static str) -> Result<f64, InputError> {
    if value > 1.0 {
        Err(InputError {
            quantity,
            source: ConstraintError::AboveMaximum,
        })
    } else {
        Ok(value)
    }
}
