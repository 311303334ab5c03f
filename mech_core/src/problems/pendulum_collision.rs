//! # Pendulum-Pendulum Elastic Collision
//!
//! Two bobs of masses m₁ and m₂ hang side by side on cords of length L. The
//! first is pulled aside by θ and released; it strikes the resting second bob
//! elastically at the bottom of its swing.
//!
//! The struck bob swings up until the cord goes slack at angle φ from the
//! vertical. That only happens when `v₂² / (g·L) < 1`; otherwise the cord
//! stays taut for the whole swing and the problem has no answer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ProblemId;
use crate::catalog::{OutputField, ProblemDefinition};
use crate::constants::GRAVITY_M_S2;
use crate::errors::{SolveError, SolveResult};
use crate::params::{ParameterSpec, ValidatedParameters};
use crate::units::{Degrees, Radians, Unit};

const FIRST_MASS: &str = "m₁";
const SECOND_MASS: &str = "m₂";
const CORD_LENGTH: &str = "L";
const RELEASE_ANGLE: &str = "θ";

/// Catalog entry for this problem.
pub fn definition() -> ProblemDefinition {
    ProblemDefinition {
        id: ProblemId::PendulumCollision,
        title: "Pendulum-pendulum elastic collision",
        statement: "Two small balls of masses m₁ and m₂ hang on threads of equal length L, \
                    touching each other. The first ball is deflected by an angle θ and \
                    released; the collision is perfectly elastic. Find the speed v₂ of the \
                    second ball after the impact, the angle φ at which its thread goes slack, \
                    and the height h the first ball rises after the rebound.",
        parameters: vec![
            ParameterSpec::positive(FIRST_MASS, "m1", "First ball mass", Unit::Kilogram),
            ParameterSpec::positive(SECOND_MASS, "m2", "Second ball mass", Unit::Kilogram),
            ParameterSpec::positive(CORD_LENGTH, "cord_length", "Thread length", Unit::Meter),
            ParameterSpec::acute_angle(RELEASE_ANGLE, "theta", "Release angle"),
        ],
        constraints: vec![],
        outputs: vec![
            OutputField::new("Speed of the second ball", "v₂", Unit::MeterPerSecond, 3),
            OutputField::new("Slack angle", "φ", Unit::Degree, 2),
            OutputField::new("Rebound height", "h", Unit::Meter, 3),
        ],
        formulas: vec![
            "v₁ = sqrt(2·g·L·(1 − cos θ))",
            "v₂ = 2·m₁ / (m₁ + m₂) · v₁",
            "cos φ = v₂² / (g·L), requires cos φ < 1",
            "u₁ = (m₁ − m₂) / (m₁ + m₂) · v₁",
            "h = u₁² / (2·g)",
        ],
    }
}

/// Input parameters for the elastic pendulum collision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendulumCollisionInput {
    /// Released bob mass m₁ (kg)
    pub first_mass_kg: f64,
    /// Struck bob mass m₂ (kg)
    pub second_mass_kg: f64,
    /// Cord length L (m)
    pub cord_length_m: f64,
    /// Release angle θ (degrees)
    pub release_angle_deg: f64,
}

impl PendulumCollisionInput {
    pub fn from_params(params: &ValidatedParameters) -> SolveResult<Self> {
        Ok(PendulumCollisionInput {
            first_mass_kg: params.get(FIRST_MASS)?,
            second_mass_kg: params.get(SECOND_MASS)?,
            cord_length_m: params.get(CORD_LENGTH)?,
            release_angle_deg: params.get(RELEASE_ANGLE)?,
        })
    }
}

/// Results for the elastic pendulum collision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendulumCollisionResult {
    /// Speed of the struck bob right after impact (m/s)
    pub struck_speed_m_s: f64,
    /// Angle from the vertical where the cord goes slack (degrees)
    pub slack_angle_deg: f64,
    /// Height the released bob rises after rebounding (m)
    pub rebound_height_m: f64,
}

impl PendulumCollisionResult {
    pub fn values(&self) -> Vec<f64> {
        vec![self.struck_speed_m_s, self.slack_angle_deg, self.rebound_height_m]
    }
}

/// Calculate the collision outcome.
///
/// # Errors
///
/// * `SolveError::Domain` - the struck bob is too slow for its cord to go slack
pub fn calculate(input: &PendulumCollisionInput) -> SolveResult<PendulumCollisionResult> {
    let m1 = input.first_mass_kg;
    let m2 = input.second_mass_kg;
    let length = input.cord_length_m;
    let theta: Radians = Degrees(input.release_angle_deg).into();

    let v1 = (2.0 * GRAVITY_M_S2 * length * (1.0 - theta.cos())).sqrt();
    let v2 = 2.0 * m1 / (m1 + m2) * v1;

    let cos_phi = v2 * v2 / (GRAVITY_M_S2 * length);
    let phi = match Radians::acos(cos_phi) {
        Some(phi) if cos_phi < 1.0 => phi,
        _ => {
            debug!(cos_phi, "cord stays taut");
            return Err(SolveError::domain(
                ProblemId::PendulumCollision.slug(),
                "cord never slackens",
            ));
        }
    };

    let u1 = (m1 - m2) / (m1 + m2) * v1;
    let rebound_height_m = u1 * u1 / (2.0 * GRAVITY_M_S2);

    Ok(PendulumCollisionResult {
        struck_speed_m_s: v2,
        slack_angle_deg: Degrees::from(phi).0,
        rebound_height_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> PendulumCollisionInput {
        PendulumCollisionInput {
            first_mass_kg: 0.2,
            second_mass_kg: 1.0,
            cord_length_m: 1.0,
            release_angle_deg: 60.0,
        }
    }

    #[test]
    fn test_light_bob_strikes_heavy_bob() {
        let result = calculate(&test_input()).unwrap();
        // v₁ = sqrt(9.81) = 3.1321, v₂ = v₁ / 3 = 1.0440
        assert!((result.struck_speed_m_s - 1.0440).abs() < 1e-4);
        // cos φ = 1/9
        assert!((result.slack_angle_deg - 83.62).abs() < 0.01);
        // u₁ = -2/3 v₁, h = (4/9)(9.81)/(2 * 9.81) = 0.2222
        assert!((result.rebound_height_m - 0.2222).abs() < 1e-4);
    }

    #[test]
    fn test_taut_cord_is_domain_error() {
        let input = PendulumCollisionInput {
            first_mass_kg: 1.0,
            second_mass_kg: 1.0,
            cord_length_m: 1.0,
            release_angle_deg: 80.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, SolveError::domain("pendulum-collision", "cord never slackens"));
    }

    #[test]
    fn test_equal_masses_do_not_rebound() {
        let mut input = test_input();
        input.first_mass_kg = 1.0;
        input.release_angle_deg = 30.0;
        let result = calculate(&input).unwrap();
        assert!(result.rebound_height_m.abs() < 1e-15);
    }
}
