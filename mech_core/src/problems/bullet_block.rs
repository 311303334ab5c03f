//! # Embedded Bullet on a Table
//!
//! A bullet of mass m flying horizontally at v₀ embeds itself in a block of
//! mass M resting on a table with friction coefficient μ.
//!
//! - Perfectly inelastic collision: `u = m·v₀ / (M + m)`
//! - Work-energy theorem against friction: `S = u² / (2·μ·g)`

use serde::{Deserialize, Serialize};

use super::ProblemId;
use crate::catalog::{OutputField, ProblemDefinition};
use crate::constants::GRAVITY_M_S2;
use crate::errors::SolveResult;
use crate::params::{ParameterSpec, ValidatedParameters};
use crate::units::Unit;

const BLOCK_MASS: &str = "M";
const BULLET_MASS: &str = "m";
const BULLET_SPEED: &str = "v₀";
const FRICTION: &str = "μ";

/// Catalog entry for this problem.
pub fn definition() -> ProblemDefinition {
    ProblemDefinition {
        id: ProblemId::BulletBlock,
        title: "Embedded bullet on a table",
        statement: "A bullet of mass m flying horizontally with speed v₀ hits a block of mass M \
                    lying on a horizontal table and gets stuck in it. The coefficient of \
                    friction between the block and the table is μ. Find the speed u of the \
                    block right after the impact and the distance S it slides before stopping.",
        parameters: vec![
            ParameterSpec::positive(BLOCK_MASS, "block_mass", "Block mass", Unit::Kilogram),
            ParameterSpec::positive(BULLET_MASS, "bullet_mass", "Bullet mass", Unit::Kilogram),
            ParameterSpec::positive(
                BULLET_SPEED,
                "bullet_speed",
                "Bullet speed",
                Unit::MeterPerSecond,
            ),
            ParameterSpec::positive(
                FRICTION,
                "friction",
                "Friction coefficient",
                Unit::Dimensionless,
            ),
        ],
        constraints: vec![],
        outputs: vec![
            OutputField::new("Speed after impact", "u", Unit::MeterPerSecond, 3),
            OutputField::new("Distance to stop", "S", Unit::Meter, 3),
        ],
        formulas: vec!["u = m·v₀ / (M + m)", "S = u² / (2·μ·g)"],
    }
}

/// Input parameters for the embedded bullet problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletBlockInput {
    /// Block mass M (kg)
    pub block_mass_kg: f64,
    /// Bullet mass m (kg)
    pub bullet_mass_kg: f64,
    /// Bullet speed before impact v₀ (m/s)
    pub bullet_speed_m_s: f64,
    /// Block/table friction coefficient μ
    pub friction_coefficient: f64,
}

impl BulletBlockInput {
    pub fn from_params(params: &ValidatedParameters) -> SolveResult<Self> {
        Ok(BulletBlockInput {
            block_mass_kg: params.get(BLOCK_MASS)?,
            bullet_mass_kg: params.get(BULLET_MASS)?,
            bullet_speed_m_s: params.get(BULLET_SPEED)?,
            friction_coefficient: params.get(FRICTION)?,
        })
    }
}

/// Results for the embedded bullet problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletBlockResult {
    /// Common speed of block and bullet after impact (m/s)
    pub impact_speed_m_s: f64,
    /// Sliding distance until rest (m)
    pub stopping_distance_m: f64,
}

impl BulletBlockResult {
    pub fn values(&self) -> Vec<f64> {
        vec![self.impact_speed_m_s, self.stopping_distance_m]
    }
}

/// Calculate the post-impact speed and stopping distance.
pub fn calculate(input: &BulletBlockInput) -> SolveResult<BulletBlockResult> {
    let total_mass = input.block_mass_kg + input.bullet_mass_kg;
    let impact_speed_m_s = input.bullet_mass_kg * input.bullet_speed_m_s / total_mass;
    let stopping_distance_m =
        impact_speed_m_s * impact_speed_m_s / (2.0 * input.friction_coefficient * GRAVITY_M_S2);

    Ok(BulletBlockResult {
        impact_speed_m_s,
        stopping_distance_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> BulletBlockInput {
        BulletBlockInput {
            block_mass_kg: 1.0,
            bullet_mass_kg: 0.01,
            bullet_speed_m_s: 300.0,
            friction_coefficient: 0.3,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate(&test_input()).unwrap();
        // u = 0.01 * 300 / 1.01 = 2.9703
        assert!((result.impact_speed_m_s - 2.9703).abs() < 1e-4);
        // S = 2.9703² / (2 * 0.3 * 9.81) = 1.4989
        assert!((result.stopping_distance_m - 1.4989).abs() < 1e-4);
    }

    #[test]
    fn test_momentum_conserved() {
        let input = test_input();
        let result = calculate(&input).unwrap();
        let before = input.bullet_mass_kg * input.bullet_speed_m_s;
        let after = (input.block_mass_kg + input.bullet_mass_kg) * result.impact_speed_m_s;
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_more_friction_stops_sooner() {
        let base = calculate(&test_input()).unwrap();
        let mut input = test_input();
        input.friction_coefficient = 0.6;
        let rough = calculate(&input).unwrap();
        assert!((rough.stopping_distance_m * 2.0 - base.stopping_distance_m).abs() < 1e-9);
    }
}
