use uom::si::f64::{
    DynamicViscosity, Length, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity,
    Velocity,
};

use crate::support::guard::{InputError, fraction, positive};

/// Operating conditions of a packed tube exchanging heat through its wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTransferInputs {
    /// Superficial fluid velocity.
    pub velocity: Velocity,
    pub particle_diameter: Length,
    pub tube_diameter: Length,
    pub void_fraction: Ratio,
    pub fluid_conductivity: ThermalConductivity,
    pub solid_conductivity: ThermalConductivity,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub heat_capacity: SpecificHeatCapacity,
}

impl WallTransferInputs {
    /// Checks that every property is finite and strictly positive, and that
    /// the void fraction lies in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first invalid property.
    pub fn validate(&self) -> Result<(), InputError> {
        positive(self.velocity, "velocity")?;
        positive(self.particle_diameter, "particle diameter")?;
        positive(self.tube_diameter, "tube diameter")?;
        fraction(self.void_fraction, "void fraction")?;
        positive(self.fluid_conductivity, "fluid thermal conductivity")?;
        positive(self.solid_conductivity, "solid thermal conductivity")?;
        positive(self.density, "density")?;
        positive(self.viscosity, "viscosity")?;
        positive(self.heat_capacity, "heat capacity")?;
        Ok(())
    }
}
