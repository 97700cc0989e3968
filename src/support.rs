//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own (a Reynolds
//! number or a Bessel function is not specific to any one model), but their
//! APIs are not stable.

pub mod bessel;
pub mod constraint;
pub mod dimensionless;
pub mod guard;
pub mod interpolate;
