//! # Physical Constants
//!
//! Fixed values shared by every problem evaluator.

/// Gravitational acceleration in m/s²
pub const GRAVITY_M_S2: f64 = 9.81;

/// Cart speeds below this threshold (m/s) are treated as "no motion".
///
/// When the pendulum cart barely moves there is nothing to oppose, so the
/// stopping mass ratio is reported as exactly zero.
pub const NEGLIGIBLE_VELOCITY_M_S: f64 = 1e-6;

/// Smallest display precision (decimal digits) an output field may declare
pub const MIN_PRECISION: u8 = 2;

/// Largest display precision (decimal digits) an output field may declare
pub const MAX_PRECISION: u8 = 5;
