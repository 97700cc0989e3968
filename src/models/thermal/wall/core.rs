//! Overall heat transfer coefficient between a packed bed and its tube wall.
//!
//! The overall coefficient combines a wall film resistance `1/h_w` with the
//! radial conduction resistance of the bed. The complete model weights the
//! bed resistance by the Bessel ratio `I0(N_w) / (N_w I1(N_w))`, where
//! `N_w = (D_t/2) √(4 h_w / (k_er D_t))`. The approximate model fixes that
//! ratio at `1/2`.

mod config;
mod error;
mod input;
mod model;
mod ratio;

pub use config::WallModelConfig;
pub use error::{WallTransferError, WallTransferPartial};
pub use input::WallTransferInputs;
pub use model::{OverallCoefficient, WallComparison, WallModel, WallTransfer, WallTransferResult};

pub(crate) use model::{compare, evaluate};
