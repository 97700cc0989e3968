use thiserror::Error;
use uom::si::f64::{HeatTransfer, ThermalConductivity};

use crate::support::guard::{DomainError, InputError};

/// Intermediates computed before a wall heat transfer evaluation failed.
///
/// Each field is `Some` only if that step completed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallTransferPartial {
    pub reynolds: Option<f64>,
    pub prandtl: Option<f64>,
    pub nusselt: Option<f64>,
    pub wall_coefficient: Option<HeatTransfer>,
    pub static_conductivity: Option<ThermalConductivity>,
    pub radial_conductivity: Option<ThermalConductivity>,
    pub wall_number: Option<f64>,
    pub bessel_ratio: Option<f64>,
}

/// Errors that can occur while evaluating wall heat transfer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WallTransferError {
    /// An input property was invalid.
    #[error(transparent)]
    Input(#[from] InputError),

    /// An intermediate quantity came out non-finite or negative.
    #[error("non-physical {quantity}: {value}")]
    NonPhysical {
        quantity: &'static str,
        value: f64,
        partial: Box<WallTransferPartial>,
    },

    /// The wall-correction ratio could not be evaluated.
    #[error("wall correction failed: {source}")]
    Domain {
        #[source]
        source: DomainError,
        partial: Box<WallTransferPartial>,
    },
}

impl WallTransferError {
    /// The intermediates computed before the failure, if evaluation started.
    #[must_use]
    pub fn partial(&self) -> Option<&WallTransferPartial> {
        match self {
            Self::Input(_) => None,
            Self::NonPhysical { partial, .. } | Self::Domain { partial, .. } => Some(partial),
        }
    }
}
