//! # Unit Types
//!
//! Unit labels for parameters and results, plus lightweight angle wrappers.
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Every problem works in SI with a fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - The only conversion the solvers need is degrees to radians and back
//!
//! ## Example
//!
//! ```rust
//! use mech_core::units::{Degrees, Radians, Unit};
//!
//! let angle = Degrees(180.0);
//! let rad: Radians = angle.into();
//! assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
//!
//! assert_eq!(Unit::MeterPerSecond.symbol(), "m/s");
//! ```

use serde::{Deserialize, Serialize};

/// Physical unit attached to a parameter or derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilogram,
    Meter,
    Second,
    Degree,
    MeterPerSecond,
    RadianPerSecond,
    Newton,
    Joule,
    /// Pure number (friction coefficients, mass ratios)
    Dimensionless,
}

impl Unit {
    /// Short symbol for display (empty for dimensionless quantities)
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Meter => "m",
            Unit::Second => "s",
            Unit::Degree => "°",
            Unit::MeterPerSecond => "m/s",
            Unit::RadianPerSecond => "rad/s",
            Unit::Newton => "N",
            Unit::Joule => "J",
            Unit::Dimensionless => "",
        }
    }

    /// Symbol for tables, where an empty cell would be ambiguous
    pub fn table_symbol(&self) -> &'static str {
        match self {
            Unit::Dimensionless => "-",
            other => other.symbol(),
        }
    }
}

/// Angle in degrees, as entered by users
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians, as consumed by trigonometric functions
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Radians {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Inverse cosine, or `None` when the argument leaves [-1, 1]
    pub fn acos(cosine: f64) -> Option<Self> {
        if (-1.0..=1.0).contains(&cosine) {
            Some(Radians(cosine.acos()))
        } else {
            None
        }
    }
}
