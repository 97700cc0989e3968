//! Friction factor and pressure drop for fully developed pipe flow.
//!
//! Evaluation is split by flow regime. Laminar flow is closed form,
//! transitional flow is a linear blend across `2300 ≤ Re < 4000`, and
//! turbulent flow uses Blasius, the fully rough limit, or an iterative
//! Colebrook–White solve depending on Reynolds number and wall roughness.

mod colebrook;
mod fitting;
mod friction;
mod input;
mod pressure_drop;
mod regime;

pub use colebrook::{ColebrookConfig, IterationReport, Status};
pub use fitting::Fitting;
pub use friction::FrictionResult;
pub use input::{PipeFlow, PipeSegment};
pub use pressure_drop::PressureDrop;
pub use regime::{FlowRegime, TurbulentFormula};

pub(crate) use friction::friction;
pub(crate) use pressure_drop::pressure_drop;
