//! Effective thermal conductivity of packed beds.
//!
//! The Zehner–Bauer–Schlünder model treats the bed as a unit cell of fluid
//! in series and parallel with a deformed particle core. Its closed form
//! contains a logarithm and a denominator that vanishes when the
//! conductivity ratio equals the shape factor; every such step is guarded
//! and reported as a [`DomainError`](crate::support::guard::DomainError).

mod error;
mod input;
mod radiative;
mod zbs;

pub use error::BedConductivityError;
pub use input::{RadiationParameters, RadiativeBedInputs, SPHERE_SHAPE_FACTOR, StaticBedInputs};
pub use radiative::RadiativeBedConductivity;
pub use zbs::BedConductivity;

pub(crate) use radiative::radiative_conductivity;
pub(crate) use zbs::{static_conductivity, static_ratio};
