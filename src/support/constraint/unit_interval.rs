use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Types that can express the endpoints of the unit interval.
pub trait UnitBounds: PartialOrd + Sized {
    /// Returns `(0, 1)` in this type.
    fn unit_bounds() -> (Self, Self);
}

impl UnitBounds for f64 {
    fn unit_bounds() -> (Self, Self) {
        (0.0, 1.0)
    }
}

impl UnitBounds for Ratio {
    fn unit_bounds() -> (Self, Self) {
        (Ratio::new::<ratio>(0.0), Ratio::new::<ratio>(1.0))
    }
}

/// Marker type enforcing that a value lies in the open unit interval: `0 < x < 1`.
///
/// Bed void fractions carry this constraint: an empty tube (`ε = 1`) or a
/// solid block (`ε = 0`) is not a packed bed.
///
/// # Examples
///
/// ```
/// use packed_bed_models::support::constraint::{Constrained, UnitIntervalOpen};
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// let eps = Constrained::<_, UnitIntervalOpen>::new(0.4).unwrap();
/// assert_eq!(eps.into_inner(), 0.4);
///
/// let eps = UnitIntervalOpen::new(Ratio::new::<ratio>(0.38)).unwrap();
/// assert_eq!(eps.as_ref().get::<ratio>(), 0.38);
///
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// assert!(UnitIntervalOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] at or below zero,
    /// [`ConstraintError::AboveMaximum`] at or above one, and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let (lower, upper) = T::unit_bounds();
        match (value.partial_cmp(&lower), value.partial_cmp(&upper)) {
            (Some(Ordering::Greater), Some(Ordering::Less)) => Ok(()),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (Some(_), Some(_)) => Err(ConstraintError::AboveMaximum),
            _ => Err(ConstraintError::NotANumber),
        }
    }
}
