//! # Wedge and Block Wall Bounce
//!
//! A block of mass m slides without friction from height H down a wedge of
//! mass M (incline angle α) that is free to move on a smooth floor. The
//! wedge recoils, hits a wall, and bounces back elastically, after which the
//! block climbs the wedge again.
//!
//! ## Assumptions
//!
//! - All surfaces frictionless
//! - Wall impact perfectly elastic
//! - α strictly inside (0°, 90°), so `sin α > 0`

use serde::{Deserialize, Serialize};

use super::ProblemId;
use crate::catalog::{OutputField, ProblemDefinition};
use crate::constants::GRAVITY_M_S2;
use crate::errors::SolveResult;
use crate::params::{ParameterSpec, ValidatedParameters};
use crate::units::{Degrees, Radians, Unit};

const WEDGE_MASS: &str = "M";
const BLOCK_MASS: &str = "m";
const INCLINE_ANGLE: &str = "α";
const DROP_HEIGHT: &str = "H";

/// Catalog entry for this problem.
pub fn definition() -> ProblemDefinition {
    ProblemDefinition {
        id: ProblemId::WedgeBounce,
        title: "Wedge-and-block elastic wall bounce",
        statement: "A small block of mass m slides without friction from the top of a wedge of \
                    mass M and height H with incline angle α. The wedge stands on a smooth \
                    floor next to a wall, recoils, and bounces off the wall elastically. Find \
                    the wedge speed V, the height h the block rises to afterwards, and the \
                    total time t of the motion.",
        parameters: vec![
            ParameterSpec::positive(WEDGE_MASS, "wedge_mass", "Wedge mass", Unit::Kilogram),
            ParameterSpec::positive(BLOCK_MASS, "block_mass", "Block mass", Unit::Kilogram),
            ParameterSpec::acute_angle(INCLINE_ANGLE, "incline_angle", "Incline angle"),
            ParameterSpec::positive(DROP_HEIGHT, "height", "Wedge height", Unit::Meter),
        ],
        constraints: vec![],
        outputs: vec![
            OutputField::new("Wedge speed", "V", Unit::MeterPerSecond, 3),
            OutputField::new("Rise height", "h", Unit::Meter, 3),
            OutputField::new("Total time", "t", Unit::Second, 2),
        ],
        formulas: vec![
            "V = sqrt(2·m²·g·H·cos²α / ((M + m)·(M + m·sin²α)))",
            "h = H·((M − m·sin²α) / (M + m·sin²α))²",
            "t = 2·sqrt(2·H / (g·sin α))·(1 + (M + m·sin²α) / M)",
        ],
    }
}

/// Input parameters for the wedge bounce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WedgeBounceInput {
    /// Wedge mass M (kg)
    pub wedge_mass_kg: f64,
    /// Block mass m (kg)
    pub block_mass_kg: f64,
    /// Incline angle α (degrees)
    pub incline_angle_deg: f64,
    /// Starting height of the block H (m)
    pub drop_height_m: f64,
}

impl WedgeBounceInput {
    pub fn from_params(params: &ValidatedParameters) -> SolveResult<Self> {
        Ok(WedgeBounceInput {
            wedge_mass_kg: params.get(WEDGE_MASS)?,
            block_mass_kg: params.get(BLOCK_MASS)?,
            incline_angle_deg: params.get(INCLINE_ANGLE)?,
            drop_height_m: params.get(DROP_HEIGHT)?,
        })
    }
}

/// Results for the wedge bounce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgeBounceResult {
    /// Wedge recoil speed (m/s)
    pub wedge_speed_m_s: f64,
    /// Height the block climbs after the wall bounce (m)
    pub rise_height_m: f64,
    /// Duration of the whole round trip (s)
    pub total_time_s: f64,
}

impl WedgeBounceResult {
    pub fn values(&self) -> Vec<f64> {
        vec![self.wedge_speed_m_s, self.rise_height_m, self.total_time_s]
    }
}

/// Calculate wedge recoil, rebound height and total time.
pub fn calculate(input: &WedgeBounceInput) -> SolveResult<WedgeBounceResult> {
    let big_m = input.wedge_mass_kg;
    let m = input.block_mass_kg;
    let height = input.drop_height_m;
    let alpha: Radians = Degrees(input.incline_angle_deg).into();

    let sin_a = alpha.sin();
    let cos_a = alpha.cos();
    // Effective inertia of the wedge along the floor
    let reduced = big_m + m * sin_a * sin_a;

    let wedge_speed_m_s = (2.0 * m * m * GRAVITY_M_S2 * height * cos_a * cos_a
        / ((big_m + m) * reduced))
        .sqrt();

    let rise_height_m = height * ((big_m - m * sin_a * sin_a) / reduced).powi(2);

    let total_time_s =
        2.0 * (2.0 * height / (GRAVITY_M_S2 * sin_a)).sqrt() * (1.0 + reduced / big_m);

    Ok(WedgeBounceResult {
        wedge_speed_m_s,
        rise_height_m,
        total_time_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> WedgeBounceInput {
        WedgeBounceInput {
            wedge_mass_kg: 2.0,
            block_mass_kg: 1.0,
            incline_angle_deg: 30.0,
            drop_height_m: 0.5,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.wedge_speed_m_s - 1.0440).abs() < 1e-4);
        // h = 0.5 * (1.75 / 2.25)² = 0.3025
        assert!((result.rise_height_m - 0.3025).abs() < 1e-4);
        assert!((result.total_time_s - 1.9190).abs() < 1e-4);
    }

    #[test]
    fn test_rise_never_exceeds_drop() {
        for angle in [5.0, 30.0, 60.0, 85.0] {
            let mut input = test_input();
            input.incline_angle_deg = angle;
            let result = calculate(&input).unwrap();
            assert!(result.rise_height_m <= input.drop_height_m);
            assert!(result.total_time_s.is_finite());
        }
    }
}
