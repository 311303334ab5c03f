//! # Pendulum-Release Cart
//!
//! A cart of mass M rests on a frictionless floor. A light rigid rod of
//! length l is mounted on the cart with a small bob of mass m at its end.
//! The rod is pulled aside by α from the vertical and released.
//!
//! Momentum conservation along the floor plus energy conservation give the
//! cart speed as the bob passes the vertical:
//!
//! ```text
//! V = sqrt(2·m²·g·l·(1 − cos α) / (M·(M + m)))
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mech_core::problems::pendulum_cart::{calculate, PendulumCartInput};
//!
//! let input = PendulumCartInput {
//!     cart_mass_kg: 1.0,
//!     bob_mass_kg: 0.1,
//!     rod_length_m: 0.5,
//!     release_angle_deg: 30.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.cart_speed_m_s - 0.1093).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use super::ProblemId;
use crate::catalog::{OutputField, ProblemDefinition};
use crate::constants::{GRAVITY_M_S2, NEGLIGIBLE_VELOCITY_M_S};
use crate::errors::SolveResult;
use crate::params::{ParameterSpec, ValidatedParameters};
use crate::units::{Degrees, Radians, Unit};

const CART_MASS: &str = "M";
const BOB_MASS: &str = "m";
const ROD_LENGTH: &str = "l";
const RELEASE_ANGLE: &str = "α";

/// Catalog entry for this problem.
pub fn definition() -> ProblemDefinition {
    ProblemDefinition {
        id: ProblemId::PendulumCart,
        title: "Pendulum-release cart",
        statement: "A cart of mass M rests on a smooth horizontal surface. A light rigid rod \
                    of length l is fixed to the cart with a small ball of mass m at its end. \
                    The rod is deflected by an angle α from the vertical and released. Find \
                    the cart speed V at the moment the rod passes the vertical, and the mass \
                    ratio m/M needed to stop the cart.",
        parameters: vec![
            ParameterSpec::positive(CART_MASS, "cart_mass", "Cart mass", Unit::Kilogram),
            ParameterSpec::positive(BOB_MASS, "bob_mass", "Ball mass", Unit::Kilogram),
            ParameterSpec::positive(ROD_LENGTH, "rod_length", "Rod length", Unit::Meter),
            ParameterSpec::acute_angle(RELEASE_ANGLE, "release_angle", "Deflection angle"),
        ],
        constraints: vec![],
        outputs: vec![
            OutputField::new("Cart speed", "V", Unit::MeterPerSecond, 4),
            OutputField::new("Mass ratio to stop the cart", "m/M", Unit::Dimensionless, 2),
        ],
        formulas: vec![
            "V = sqrt(2·m²·g·l·(1 − cos α) / (M·(M + m)))",
            "m/M if V ≥ 1e-6 m/s, otherwise 0",
        ],
    }
}

/// Input parameters for the pendulum-release cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendulumCartInput {
    /// Cart mass M (kg)
    pub cart_mass_kg: f64,
    /// Bob mass m (kg)
    pub bob_mass_kg: f64,
    /// Rod length l (m)
    pub rod_length_m: f64,
    /// Release angle α from the vertical (degrees)
    pub release_angle_deg: f64,
}

impl PendulumCartInput {
    pub fn from_params(params: &ValidatedParameters) -> SolveResult<Self> {
        Ok(PendulumCartInput {
            cart_mass_kg: params.get(CART_MASS)?,
            bob_mass_kg: params.get(BOB_MASS)?,
            rod_length_m: params.get(ROD_LENGTH)?,
            release_angle_deg: params.get(RELEASE_ANGLE)?,
        })
    }
}

/// Results for the pendulum-release cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendulumCartResult {
    /// Cart speed V as the rod passes the vertical (m/s)
    pub cart_speed_m_s: f64,
    /// Mass ratio m/M, or 0 when the cart does not move
    pub stop_mass_ratio: f64,
}

impl PendulumCartResult {
    /// Values in output-field order
    pub fn values(&self) -> Vec<f64> {
        vec![self.cart_speed_m_s, self.stop_mass_ratio]
    }
}

/// Calculate the cart speed and stopping mass ratio.
///
/// Always succeeds for validated inputs: the radicand is non-negative.
pub fn calculate(input: &PendulumCartInput) -> SolveResult<PendulumCartResult> {
    let big_m = input.cart_mass_kg;
    let m = input.bob_mass_kg;
    let alpha: Radians = Degrees(input.release_angle_deg).into();

    let numerator = 2.0 * m * m * GRAVITY_M_S2 * input.rod_length_m * (1.0 - alpha.cos());
    let denominator = big_m * (big_m + m);
    let cart_speed_m_s = (numerator / denominator).sqrt();

    // The ratio only means something when there is motion to oppose
    let stop_mass_ratio = if cart_speed_m_s < NEGLIGIBLE_VELOCITY_M_S {
        0.0
    } else {
        m / big_m
    };

    Ok(PendulumCartResult {
        cart_speed_m_s,
        stop_mass_ratio,
    })
}
