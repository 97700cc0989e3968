//! Fluid flow models.

pub mod pipe;
