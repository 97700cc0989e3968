//! Input validation errors and domain guards for algebraic kernels.
//!
//! Correlations in this crate are transcribed from closed-form expressions
//! that contain logarithms, square roots, and divisions by differences that
//! can vanish. Naively evaluated, a violated precondition produces `NaN` or
//! `inf` that then flows into an apparently successful result. The helpers
//! here check each precondition before evaluating and report the violation
//! as a typed [`DomainError`].

use num_traits::Zero;
use thiserror::Error;

use crate::support::constraint::{
    Constrained, ConstraintError, Finite, NonNegative, StrictlyPositive, UnitBounds,
    UnitIntervalOpen,
};

/// Absolute threshold below which a denominator is treated as zero.
pub const NEAR_ZERO: f64 = 1e-9;

/// A physical input failed validation before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {quantity}: {source}")]
pub struct InputError {
    /// Name of the offending input.
    pub quantity: &'static str,

    /// The violated constraint.
    #[source]
    pub source: ConstraintError,
}

impl InputError {
    /// Returns a closure that tags a [`ConstraintError`] with an input name.
    ///
    /// Intended for use with [`Result::map_err`].
    pub fn named(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self { quantity, source }
    }
}

/// Validates a finite, strictly positive input and returns it unwrapped.
pub(crate) fn positive<T>(value: T, quantity: &'static str) -> Result<T, InputError>
where
    T: PartialOrd + Zero + Finite,
{
    Constrained::<T, StrictlyPositive>::new(value)
        .map(Constrained::into_inner)
        .map_err(InputError::named(quantity))
}

/// Validates a finite, non-negative input and returns it unwrapped.
pub(crate) fn non_negative<T>(value: T, quantity: &'static str) -> Result<T, InputError>
where
    T: PartialOrd + Zero + Finite,
{
    Constrained::<T, NonNegative>::new(value)
        .map(Constrained::into_inner)
        .map_err(InputError::named(quantity))
}

/// Validates an input in the open unit interval and returns it unwrapped.
pub(crate) fn fraction<T: UnitBounds>(value: T, quantity: &'static str) -> Result<T, InputError> {
    Constrained::<T, UnitIntervalOpen>::new(value)
        .map(Constrained::into_inner)
        .map_err(InputError::named(quantity))
}

/// A specific algebraic precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Two quantities that appear as a difference in a denominator are too
    /// close together (e.g., the conductivity ratio equals the shape factor).
    #[error("near-singular denominator in {0}")]
    NearSingular(&'static str),

    /// A logarithm argument is zero, negative, or not a number.
    #[error("invalid logarithm argument in {0}")]
    InvalidLogArgument(&'static str),

    /// A square root argument is negative or not a number.
    #[error("invalid square root argument in {0}")]
    InvalidSqrtArgument(&'static str),

    /// A divisor is zero or vanishingly small.
    #[error("division by near-zero value in {0}")]
    DivisionByNearZero(&'static str),
}

/// Natural logarithm of a strictly positive, finite argument.
///
/// # Errors
///
/// Returns [`DomainError::InvalidLogArgument`] if `x <= 0`, `x` is `NaN`,
/// or `x` is infinite.
pub fn ln(x: f64, context: &'static str) -> Result<f64, DomainError> {
    if x > 0.0 && x.is_finite() {
        Ok(x.ln())
    } else {
        Err(DomainError::InvalidLogArgument(context))
    }
}

/// Square root of a non-negative, finite argument.
///
/// # Errors
///
/// Returns [`DomainError::InvalidSqrtArgument`] if `x < 0` or `x` is not finite.
pub fn sqrt(x: f64, context: &'static str) -> Result<f64, DomainError> {
    if x >= 0.0 && x.is_finite() {
        Ok(x.sqrt())
    } else {
        Err(DomainError::InvalidSqrtArgument(context))
    }
}

/// Divides `numerator` by a denominator bounded away from zero.
///
/// # Errors
///
/// Returns [`DomainError::DivisionByNearZero`] if `|denominator| < NEAR_ZERO`
/// or the denominator is not finite.
pub fn div(numerator: f64, denominator: f64, context: &'static str) -> Result<f64, DomainError> {
    if denominator.is_finite() && denominator.abs() >= NEAR_ZERO {
        Ok(numerator / denominator)
    } else {
        Err(DomainError::DivisionByNearZero(context))
    }
}
