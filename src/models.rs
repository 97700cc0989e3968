//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by physical domain: `flow` for pipe hydraulics and
//! `thermal` for heat transfer in and around packed beds.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** re-exported as part of the public API.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core API. A single `core` may be exposed through
//! multiple adapters (e.g., [`thermal::wall::WallHeatTransfer`] and
//! [`thermal::wall::CompareWallModels`]).

pub mod flow;
pub mod thermal;
