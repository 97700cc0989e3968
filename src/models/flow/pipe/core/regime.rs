//! Flow regime classification from Reynolds number and relative roughness.

/// Upper Reynolds bound of laminar flow.
pub(super) const LAMINAR_LIMIT: f64 = 2300.0;

/// Lower Reynolds bound of fully turbulent flow.
pub(super) const TURBULENT_LIMIT: f64 = 4000.0;

/// Relative roughness below which a pipe is hydraulically smooth.
const SMOOTH_ROUGHNESS: f64 = 1e-5;

/// Upper Reynolds bound of the Blasius correlation.
const BLASIUS_LIMIT: f64 = 1e5;

/// Reynolds number beyond which any wall is treated as fully rough.
const FULLY_ROUGH_LIMIT: f64 = 4e6;

/// Reynolds number beyond which a very rough wall is fully rough.
const ROUGH_WALL_LIMIT: f64 = 5e5;

/// Relative roughness that counts as very rough.
const ROUGH_WALL_ROUGHNESS: f64 = 0.01;

/// The flow regime, which determines how the friction factor is evaluated.
///
/// Determined solely by the Reynolds number and relative roughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// `Re < 2300`: Hagen–Poiseuille, `f = 64 / Re`.
    Laminar,

    /// `2300 ≤ Re < 4000`: linear blend between the laminar value at
    /// `Re = 2300` and the Colebrook–White value at `Re = 4000`.
    ///
    /// The blend is a modeling choice that bridges the two regimes, not a
    /// physical law of transitional flow.
    Transitional,

    /// `Re ≥ 4000`.
    Turbulent(TurbulentFormula),
}

/// The correlation used within the turbulent regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurbulentFormula {
    /// Smooth pipes at moderate Reynolds number, `f = 0.316 Re^-0.25`.
    Blasius,

    /// Reynolds-independent fully rough limit, `f = (2 log10(3.7 / ε_r))^-2`.
    ///
    /// Never selected for a perfectly smooth wall (`ε_r = 0`), where the
    /// limit degenerates to `f = 0`.
    FullyRough,

    /// General turbulent flow, solved iteratively.
    ColebrookWhite,
}

impl FlowRegime {
    /// Classifies the regime for a Reynolds number and relative roughness.
    #[must_use]
    pub fn classify(reynolds: f64, relative_roughness: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            return Self::Laminar;
        }
        if reynolds < TURBULENT_LIMIT {
            return Self::Transitional;
        }

        let formula = if relative_roughness < SMOOTH_ROUGHNESS && reynolds < BLASIUS_LIMIT {
            TurbulentFormula::Blasius
        } else if relative_roughness > 0.0
            && (reynolds > FULLY_ROUGH_LIMIT
                || (reynolds > ROUGH_WALL_LIMIT && relative_roughness > ROUGH_WALL_ROUGHNESS))
        {
            TurbulentFormula::FullyRough
        } else {
            TurbulentFormula::ColebrookWhite
        };
        Self::Turbulent(formula)
    }

    /// A stable identifier for the formula used in this regime.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transition",
            Self::Turbulent(TurbulentFormula::Blasius) => "blasius",
            Self::Turbulent(TurbulentFormula::FullyRough) => "fully_rough",
            Self::Turbulent(TurbulentFormula::ColebrookWhite) => "colebrook_white",
        }
    }

    /// The governing relation, for display alongside a result.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Self::Laminar => "f = 64/Re",
            Self::Transitional => {
                "f = f_lam(2300)·(1 - x) + f_cw(4000)·x, x = (Re - 2300)/1700"
            }
            Self::Turbulent(TurbulentFormula::Blasius) => "f = 0.316/Re^0.25",
            Self::Turbulent(TurbulentFormula::FullyRough) => "f = (2·log10(3.7/(ε/D)))^-2",
            Self::Turbulent(TurbulentFormula::ColebrookWhite) => {
                "1/√f = -2·log10((ε/D)/3.7 + 2.51/(Re·√f))"
            }
        }
    }
}
