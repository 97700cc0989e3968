//! Local (minor) losses from pipe fittings.
//!
//! Each fitting contributes a loss coefficient `K` so that the local pressure
//! drop is `K ρ u² / 2`, evaluated with the velocity in the pipe.

use uom::si::{
    angle::degree,
    f64::{Angle, Length},
    ratio::ratio,
};

use crate::support::{
    constraint::ConstraintError,
    guard::{InputError, positive},
    interpolate::Table,
};

/// Loss coefficient of a 90° elbow against bend radius over pipe diameter.
const ELBOW_K90: Table<7> = Table::new([
    (1.0, 1.2),
    (2.0, 0.9),
    (4.0, 0.75),
    (6.0, 0.6),
    (10.0, 0.5),
    (15.0, 0.42),
    (20.0, 0.4),
]);

/// Exponent of the angle correction for elbows other than 90°.
const ELBOW_ANGLE_EXPONENT: f64 = 0.8;

/// Largest bend angle accepted for an elbow.
const ELBOW_MAX_DEGREES: f64 = 180.0;

/// A fitting that adds a local loss to a pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fitting {
    /// A smooth bend of the given angle and centerline radius.
    ///
    /// The angle must lie in `(0°, 180°]`.
    Elbow { angle: Angle, bend_radius: Length },

    /// A sudden contraction from `inlet` to a smaller `outlet` diameter.
    Contraction { inlet: Length, outlet: Length },

    /// A sudden expansion from `inlet` to a larger `outlet` diameter.
    Expansion { inlet: Length, outlet: Length },
}

impl Fitting {
    /// Checks the fitting geometry.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a dimension is not finite and strictly
    /// positive, if an elbow angle exceeds 180°, or if a contraction or
    /// expansion does not change the diameter in the named direction.
    pub fn validate(&self) -> Result<(), InputError> {
        match *self {
            Self::Elbow { angle, bend_radius } => {
                if positive(angle.get::<degree>(), "elbow angle")? > ELBOW_MAX_DEGREES {
                    return Err(InputError {
                        quantity: "elbow angle",
                        source: ConstraintError::AboveMaximum,
                    });
                }
                positive(bend_radius, "bend radius")?;
            }
            Self::Contraction { inlet, outlet } => {
                positive(inlet, "inlet diameter")?;
                positive(outlet, "outlet diameter")?;
                if outlet >= inlet {
                    return Err(InputError {
                        quantity: "outlet diameter",
                        source: ConstraintError::AboveMaximum,
                    });
                }
            }
            Self::Expansion { inlet, outlet } => {
                positive(inlet, "inlet diameter")?;
                positive(outlet, "outlet diameter")?;
                if outlet <= inlet {
                    return Err(InputError {
                        quantity: "outlet diameter",
                        source: ConstraintError::BelowMinimum,
                    });
                }
            }
        }
        Ok(())
    }

    /// Loss coefficient `K` for a fitting on a pipe of the given diameter.
    ///
    /// The pipe diameter only matters for elbows, whose chart is keyed by
    /// bend radius over diameter. Assumes a validated fitting.
    #[must_use]
    pub fn loss_coefficient(&self, pipe_diameter: Length) -> f64 {
        match *self {
            Self::Elbow { angle, bend_radius } => {
                let k90 = ELBOW_K90.lookup((bend_radius / pipe_diameter).get::<ratio>());
                k90 * (angle.get::<degree>() / 90.0).powf(ELBOW_ANGLE_EXPONENT)
            }
            Self::Contraction { inlet, outlet } => {
                let beta = (outlet / inlet).get::<ratio>().powi(2);
                if beta < 0.1 {
                    0.5 * (1.0 - beta) + 0.05
                } else if beta < 0.4 {
                    0.5 * (1.0 - beta)
                } else {
                    0.5 * (1.0 - beta) * (1.0 + 0.15 * (beta - 0.4))
                }
            }
            Self::Expansion { inlet, outlet } => {
                (1.0 - (inlet / outlet).get::<ratio>().powi(2)).powi(2)
            }
        }
    }
}
