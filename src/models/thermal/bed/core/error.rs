use thiserror::Error;

use crate::support::guard::{DomainError, InputError};

/// Errors that can occur while evaluating bed conductivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BedConductivityError {
    /// An input property was invalid.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A logarithm, square root, or division in the correlation was
    /// outside its domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
