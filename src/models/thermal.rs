//! Thermal models for packed beds.
//!
//! This module contains the bed-to-wall heat transfer coefficient and the
//! effective conductivity of the bed itself.

pub mod bed;
pub mod wall;
