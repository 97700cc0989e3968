//! # Packed Bed Models
//!
//! Engineering correlations for packed and trickle-bed reactors, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! The crate covers the correlations that cannot be evaluated by direct
//! substitution: a regime-aware pipe friction factor with an iterative
//! Colebrook–White solve, modified Bessel functions for the bed-to-wall heat
//! transfer coefficient, and a domain-guarded Zehner–Bauer–Schlünder bed
//! conductivity.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`functional`]: Plain-number entry points that forward to the models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Errors
//!
//! Every entry point validates its physical inputs before computing and
//! reports violations as typed errors. Iterative solves that hit their
//! iteration cap return their last value with a report rather than failing,
//! and closed-form steps that would take the logarithm of a non-positive
//! number or divide by a vanishing denominator return a
//! [`support::guard::DomainError`] instead of `NaN`.
//!
//! ## Logging
//!
//! Regime selection, iteration counts, and rejected intermediates are
//! reported through the [`log`] facade. No logger is installed.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models. Only utilities in
//! [`support`] are part of the public API.

pub mod functional;
pub mod models;
pub mod support;
