use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, Finite};

/// Marker type enforcing that a value is finite and strictly positive.
///
/// Diameters, velocities, densities, viscosities, conductivities, and heat
/// capacities all carry this constraint.
///
/// # Examples
///
/// ```
/// use packed_bed_models::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(1.81e-5).unwrap();
/// assert_eq!(x.into_inner(), 1.81e-5);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(1.225).unwrap();
/// assert_eq!(y.into_inner(), 1.225);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// assert!(StrictlyPositive::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is
    /// finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite, or `NaN`.
    pub fn new<T: PartialOrd + Zero + Finite>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero + Finite> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(Ordering::Greater) if !value.is_finite_value() => Err(ConstraintError::Infinite),
            Some(Ordering::Greater) => Ok(()),
        }
    }
}
