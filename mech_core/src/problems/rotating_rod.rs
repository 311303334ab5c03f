//! # Flexible Rotating Rod with Bob
//!
//! A bob of mass m on a light rod of length L hinged to a vertical axis spins
//! up from ω₀ to ω. At the final speed the rod settles at angle α from the
//! vertical, where `cos α = g / (L·ω²)`.
//!
//! The work required is the change in mechanical energy:
//!
//! ```text
//! A = (K + U) − K₀
//! K₀ = ½·m·L²·ω₀²
//! K  = ½·m·L²·ω²·sin²α
//! U  = m·g·L·(1 − cos α)
//! ```
//!
//! `ω > ω₀` is enforced by the validator through the catalog's ordering
//! constraint, not here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ProblemId;
use crate::catalog::{OutputField, ProblemDefinition};
use crate::constants::GRAVITY_M_S2;
use crate::errors::{SolveError, SolveResult};
use crate::params::{OrderingConstraint, ParameterSpec, ValidatedParameters};
use crate::units::{Degrees, Radians, Unit};

const BOB_MASS: &str = "m";
const ROD_LENGTH: &str = "L";
const INITIAL_SPEED: &str = "ω₀";
const FINAL_SPEED: &str = "ω";

/// Catalog entry for this problem.
pub fn definition() -> ProblemDefinition {
    ProblemDefinition {
        id: ProblemId::RotatingRod,
        title: "Flexible rotating rod with bob",
        statement: "A small ball of mass m is attached to a light rod of length L hinged to a \
                    vertical axis. The angular speed of rotation is increased from ω₀ to ω. \
                    Find the deflection angle α of the rod, the rod tension T, and the work A \
                    done to spin the system up.",
        parameters: vec![
            ParameterSpec::positive(BOB_MASS, "mass", "Ball mass", Unit::Kilogram),
            ParameterSpec::positive(ROD_LENGTH, "rod_length", "Rod length", Unit::Meter),
            ParameterSpec::positive(
                INITIAL_SPEED,
                "omega0",
                "Initial angular speed",
                Unit::RadianPerSecond,
            ),
            ParameterSpec::positive(
                FINAL_SPEED,
                "omega",
                "Final angular speed",
                Unit::RadianPerSecond,
            ),
        ],
        constraints: vec![OrderingConstraint {
            greater: FINAL_SPEED,
            lesser: INITIAL_SPEED,
        }],
        outputs: vec![
            OutputField::new("Deflection angle", "α", Unit::Degree, 2),
            OutputField::new("Tension", "T", Unit::Newton, 3),
            OutputField::new("Work", "A", Unit::Joule, 3),
        ],
        formulas: vec![
            "cos α = g / (L·ω²), requires cos α < 1",
            "T = m·L·ω² / sin α",
            "K₀ = ½·m·L²·ω₀²",
            "K = ½·m·L²·ω²·sin²α",
            "U = m·g·L·(1 − cos α)",
            "A = (K + U) − K₀",
        ],
    }
}

/// Input parameters for the rotating rod.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatingRodInput {
    /// Bob mass m (kg)
    pub bob_mass_kg: f64,
    /// Rod length L (m)
    pub rod_length_m: f64,
    /// Initial angular speed ω₀ (rad/s)
    pub initial_speed_rad_s: f64,
    /// Final angular speed ω (rad/s)
    pub final_speed_rad_s: f64,
}

impl RotatingRodInput {
    pub fn from_params(params: &ValidatedParameters) -> SolveResult<Self> {
        Ok(RotatingRodInput {
            bob_mass_kg: params.get(BOB_MASS)?,
            rod_length_m: params.get(ROD_LENGTH)?,
            initial_speed_rad_s: params.get(INITIAL_SPEED)?,
            final_speed_rad_s: params.get(FINAL_SPEED)?,
        })
    }
}

/// Results for the rotating rod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotatingRodResult {
    /// Rod angle from the vertical at the final speed (degrees)
    pub deflection_deg: f64,
    /// Rod tension (N)
    pub tension_n: f64,
    /// Work done to change the speed (J); negative when energy is released
    pub work_j: f64,
}

impl RotatingRodResult {
    pub fn values(&self) -> Vec<f64> {
        vec![self.deflection_deg, self.tension_n, self.work_j]
    }
}

/// Calculate deflection, tension and work.
///
/// # Errors
///
/// * `SolveError::Domain` - ω is too low for the rod to leave the vertical
pub fn calculate(input: &RotatingRodInput) -> SolveResult<RotatingRodResult> {
    let m = input.bob_mass_kg;
    let length = input.rod_length_m;
    let omega0 = input.initial_speed_rad_s;
    let omega = input.final_speed_rad_s;

    let cos_alpha = GRAVITY_M_S2 / (length * omega * omega);
    let alpha = match Radians::acos(cos_alpha) {
        Some(alpha) if cos_alpha < 1.0 => alpha,
        _ => {
            debug!(cos_alpha, "rod stays vertical");
            return Err(SolveError::domain(
                ProblemId::RotatingRod.slug(),
                "rod does not deflect at this speed",
            ));
        }
    };
    let sin_alpha = alpha.sin();

    let tension_n = m * length * omega * omega / sin_alpha;

    let initial_kinetic = 0.5 * m * length * length * omega0 * omega0;
    let final_kinetic = 0.5 * m * length * length * omega * omega * sin_alpha * sin_alpha;
    let potential = m * GRAVITY_M_S2 * length * (1.0 - alpha.cos());
    let work_j = (final_kinetic + potential) - initial_kinetic;

    Ok(RotatingRodResult {
        deflection_deg: Degrees::from(alpha).0,
        tension_n,
        work_j,
    })
}
