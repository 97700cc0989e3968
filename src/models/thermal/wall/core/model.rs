//! Evaluation of the overall wall heat transfer coefficient.

use log::{debug, warn};
use uom::si::{
    f64::{HeatTransfer, ThermalConductivity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::dimensionless;

use super::{
    WallModelConfig, WallTransferError, WallTransferInputs, WallTransferPartial,
    ratio::bessel_ratio,
};

/// Tube-to-particle diameter ratio below which the correlations lose accuracy.
const MIN_DIAMETER_RATIO: f64 = 5.0;

/// Constant Bessel ratio of the approximate model.
const APPROXIMATE_RATIO: f64 = 0.5;

/// Which form of the radial resistance to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WallModel {
    /// Radial resistance `D_t / (2 k_er) · I0(N_w) / (N_w I1(N_w))`.
    #[default]
    Complete,

    /// Radial resistance `D_t / (4 k_er)`, the complete form with the
    /// Bessel ratio replaced by `1/2`.
    Approximate,
}

impl WallModel {
    /// A stable identifier for the model.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Complete => "overall_u",
            Self::Approximate => "overall_u_approximation",
        }
    }
}

/// Overall heat transfer coefficient and every intermediate that led to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTransfer {
    pub model: WallModel,

    /// Particle Reynolds number `d_p u ρ / μ`.
    pub reynolds: f64,
    pub prandtl: f64,

    /// Wall Nusselt number `(0.5 Re^½ + 0.2 Re^⅔) Pr^⅓`.
    pub nusselt: f64,

    /// Wall heat transfer coefficient `h_w = Nu_w k_f / D_t`.
    pub wall_coefficient: HeatTransfer,

    /// Static effective bed conductivity `k_e`.
    pub static_conductivity: ThermalConductivity,

    /// Effective radial conductivity `k_er = k_e + 0.1 Re Pr k_f`.
    pub radial_conductivity: ThermalConductivity,

    /// `N_w`, present only for [`WallModel::Complete`].
    pub wall_number: Option<f64>,

    /// `I0(N_w) / (N_w I1(N_w))`, present only for [`WallModel::Complete`].
    pub bessel_ratio: Option<f64>,

    pub overall_u: HeatTransfer,

    /// Tube diameter over particle diameter.
    pub diameter_ratio: f64,
}

/// Result of a wall heat transfer evaluation.
pub type WallTransferResult = Result<WallTransfer, WallTransferError>;

/// Access to the overall coefficient with invalid results mapped to `NaN`.
pub trait OverallCoefficient {
    /// Returns the overall coefficient, or `NaN` if evaluation failed.
    fn overall_u_or_nan(&self) -> HeatTransfer;
}

impl OverallCoefficient for WallTransferResult {
    fn overall_u_or_nan(&self) -> HeatTransfer {
        match self {
            Ok(transfer) => transfer.overall_u,
            Err(_) => HeatTransfer::new::<watt_per_square_meter_kelvin>(f64::NAN),
        }
    }
}

/// Evaluates the overall wall heat transfer coefficient.
pub(crate) fn evaluate(
    inputs: &WallTransferInputs,
    model: WallModel,
    config: &WallModelConfig,
) -> WallTransferResult {
    inputs.validate()?;

    let diameter_ratio = (inputs.tube_diameter / inputs.particle_diameter).get::<ratio>();
    if diameter_ratio < MIN_DIAMETER_RATIO {
        warn!("tube-to-particle diameter ratio {diameter_ratio} is below {MIN_DIAMETER_RATIO}");
    }

    let k_f = inputs.fluid_conductivity.get::<watt_per_meter_kelvin>();
    let k_s = inputs.solid_conductivity.get::<watt_per_meter_kelvin>();
    let d_t = inputs.tube_diameter.get::<meter>();
    let eps = inputs.void_fraction.get::<ratio>();

    let mut partial = WallTransferPartial::default();

    let re = physical(
        "particle reynolds number",
        dimensionless::reynolds(
            inputs.density,
            inputs.velocity,
            inputs.particle_diameter,
            inputs.viscosity,
        ),
        &partial,
    )?;
    partial.reynolds = Some(re);

    let pr = physical(
        "prandtl number",
        dimensionless::prandtl(inputs.heat_capacity, inputs.viscosity, inputs.fluid_conductivity),
        &partial,
    )?;
    partial.prandtl = Some(pr);

    let nu = physical(
        "wall nusselt number",
        (0.5 * re.sqrt() + 0.2 * re.powf(2.0 / 3.0)) * pr.cbrt(),
        &partial,
    )?;
    partial.nusselt = Some(nu);

    let h_w = physical("wall heat transfer coefficient", nu * k_f / d_t, &partial)?;
    partial.wall_coefficient = Some(heat_transfer(h_w));

    let kappa = k_s / k_f;
    let k_e = physical(
        "static bed conductivity",
        k_f * (eps + (1.0 - eps) * kappa / (1.0 + 0.1 * kappa)),
        &partial,
    )?;
    partial.static_conductivity = Some(conductivity(k_e));

    let k_er = physical(
        "radial bed conductivity",
        k_e + 0.1 * re * pr * k_f,
        &partial,
    )?;
    partial.radial_conductivity = Some(conductivity(k_er));

    let (wall_number, correction) = match model {
        WallModel::Complete => {
            let n_w = physical(
                "wall number",
                0.5 * d_t * (4.0 * h_w / (k_er * d_t)).sqrt(),
                &partial,
            )?;
            partial.wall_number = Some(n_w);

            let correction = bessel_ratio(n_w, config).map_err(|source| {
                warn!("wall correction rejected: {source}");
                WallTransferError::Domain {
                    source,
                    partial: Box::new(partial),
                }
            })?;
            let correction = physical("bessel ratio", correction, &partial)?;
            partial.bessel_ratio = Some(correction);

            (Some(n_w), correction)
        }
        WallModel::Approximate => (None, APPROXIMATE_RATIO),
    };

    let overall_u = physical(
        "overall heat transfer coefficient",
        1.0 / (1.0 / h_w + d_t / (2.0 * k_er) * correction),
        &partial,
    )?;

    debug!(
        "wall heat transfer ({}): re={re}, nu={nu}, h_w={h_w}, k_er={k_er}, u={overall_u}",
        model.name()
    );

    Ok(WallTransfer {
        model,
        reynolds: re,
        prandtl: pr,
        nusselt: nu,
        wall_coefficient: heat_transfer(h_w),
        static_conductivity: conductivity(k_e),
        radial_conductivity: conductivity(k_er),
        wall_number,
        bessel_ratio: wall_number.map(|_| correction),
        overall_u: heat_transfer(overall_u),
        diameter_ratio,
    })
}

/// Both wall models evaluated on the same inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallComparison {
    pub complete: WallTransfer,
    pub approximate: WallTransfer,

    /// `|U_approximate - U_complete| / U_complete`.
    pub relative_deviation: f64,
}

/// Evaluates the complete and approximate models side by side.
pub(crate) fn compare(
    inputs: &WallTransferInputs,
    config: &WallModelConfig,
) -> Result<WallComparison, WallTransferError> {
    let complete = evaluate(inputs, WallModel::Complete, config)?;
    let approximate = evaluate(inputs, WallModel::Approximate, config)?;

    let u_complete = complete.overall_u.get::<watt_per_square_meter_kelvin>();
    let u_approximate = approximate.overall_u.get::<watt_per_square_meter_kelvin>();

    Ok(WallComparison {
        complete,
        approximate,
        relative_deviation: (u_approximate - u_complete).abs() / u_complete,
    })
}

/// Accepts a finite, non-negative intermediate.
fn physical(
    quantity: &'static str,
    value: f64,
    partial: &WallTransferPartial,
) -> Result<f64, WallTransferError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        warn!("non-physical {quantity}: {value}");
        Err(WallTransferError::NonPhysical {
            quantity,
            value,
            partial: Box::new(*partial),
        })
    }
}

fn heat_transfer(value: f64) -> HeatTransfer {
    HeatTransfer::new::<watt_per_square_meter_kelvin>(value)
}

fn conductivity(value: f64) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(value)
}
