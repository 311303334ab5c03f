//! # Mechanics Problems
//!
//! One module per problem. Each follows the pattern:
//!
//! - `definition()` - catalog entry (parameters, outputs, formulas)
//! - `*Input` - typed inputs, built from [`ValidatedParameters`]
//! - `*Result` - derived quantities, in output-field order via `values()`
//! - `calculate(input) -> SolveResult<*Result>` - pure closed-form evaluation
//!
//! [`ProblemId`] is the tagged variant the solve pipeline dispatches on.
//!
//! ## Available Problems
//!
//! 1. [`pendulum_cart`] - cart speed from a released pendulum
//! 2. [`bullet_block`] - inelastic bullet impact and friction stop
//! 3. [`pendulum_collision`] - elastic collision of two pendulums
//! 4. [`wedge_bounce`] - wedge recoil and wall bounce
//! 5. [`rotating_rod`] - rod deflection under spin-up

pub mod bullet_block;
pub mod pendulum_cart;
pub mod pendulum_collision;
pub mod rotating_rod;
pub mod wedge_bounce;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ProblemDefinition;
use crate::errors::{CatalogError, SolveResult};
use crate::params::ValidatedParameters;

/// Identifier of a catalog problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemId {
    PendulumCart,
    BulletBlock,
    PendulumCollision,
    WedgeBounce,
    RotatingRod,
}

impl ProblemId {
    /// All problems, in catalog order
    pub const ALL: [ProblemId; 5] = [
        ProblemId::PendulumCart,
        ProblemId::BulletBlock,
        ProblemId::PendulumCollision,
        ProblemId::WedgeBounce,
        ProblemId::RotatingRod,
    ];

    /// Stable identifier used on the command line and in JSON
    pub fn slug(&self) -> &'static str {
        match self {
            ProblemId::PendulumCart => "pendulum-cart",
            ProblemId::BulletBlock => "bullet-block",
            ProblemId::PendulumCollision => "pendulum-collision",
            ProblemId::WedgeBounce => "wedge-bounce",
            ProblemId::RotatingRod => "rotating-rod",
        }
    }

    /// 1-based problem number
    pub fn number(&self) -> u8 {
        match self {
            ProblemId::PendulumCart => 1,
            ProblemId::BulletBlock => 2,
            ProblemId::PendulumCollision => 3,
            ProblemId::WedgeBounce => 4,
            ProblemId::RotatingRod => 5,
        }
    }

    /// Build this problem's catalog entry.
    pub fn definition(&self) -> ProblemDefinition {
        match self {
            ProblemId::PendulumCart => pendulum_cart::definition(),
            ProblemId::BulletBlock => bullet_block::definition(),
            ProblemId::PendulumCollision => pendulum_collision::definition(),
            ProblemId::WedgeBounce => wedge_bounce::definition(),
            ProblemId::RotatingRod => rotating_rod::definition(),
        }
    }

    /// Run this problem's formula, returning values in output-field order.
    pub fn evaluate(&self, params: &ValidatedParameters) -> SolveResult<Vec<f64>> {
        let values = match self {
            ProblemId::PendulumCart => {
                pendulum_cart::calculate(&pendulum_cart::PendulumCartInput::from_params(params)?)?
                    .values()
            }
            ProblemId::BulletBlock => {
                bullet_block::calculate(&bullet_block::BulletBlockInput::from_params(params)?)?
                    .values()
            }
            ProblemId::PendulumCollision => pendulum_collision::calculate(
                &pendulum_collision::PendulumCollisionInput::from_params(params)?,
            )?
            .values(),
            ProblemId::WedgeBounce => {
                wedge_bounce::calculate(&wedge_bounce::WedgeBounceInput::from_params(params)?)?
                    .values()
            }
            ProblemId::RotatingRod => {
                rotating_rod::calculate(&rotating_rod::RotatingRodInput::from_params(params)?)?
                    .values()
            }
        };
        Ok(values)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ProblemId {
    type Err = CatalogError;

    /// Accepts the slug (`wedge-bounce`), snake case (`wedge_bounce`), or
    /// the problem number (`4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ProblemId::ALL
            .into_iter()
            .find(|id| id.slug() == wanted || id.number().to_string() == wanted)
            .ok_or_else(|| CatalogError::UnknownProblem {
                ident: s.to_string(),
            })
    }
}
