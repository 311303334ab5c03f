//! # Parameters
//!
//! Declarative descriptions of problem inputs ([`ParameterSpec`]), the raw
//! values callers hand in ([`RawValue`]), and the checked record the
//! validator produces ([`ValidatedParameters`]).
//!
//! ## JSON Example
//!
//! Raw inputs may mix numbers and text, keyed by symbol or ASCII key:
//!
//! ```json
//! { "M": 1.0, "bob_mass": "0.1", "l": 0.5, "release_angle": "30" }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{SolveError, SolveResult, ValidationReason};
use crate::units::Unit;

/// Physical bound a parameter value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bound {
    /// value > 0
    StrictlyPositive,
    /// lower < value < upper
    OpenInterval { lower: f64, upper: f64 },
}

impl Bound {
    /// Acute angle in degrees, (0, 90)
    pub const ACUTE_ANGLE: Bound = Bound::OpenInterval {
        lower: 0.0,
        upper: 90.0,
    };

    /// Check a finite value against this bound.
    pub fn check(&self, value: f64) -> Result<(), ValidationReason> {
        match *self {
            Bound::StrictlyPositive if value > 0.0 => Ok(()),
            Bound::StrictlyPositive => Err(ValidationReason::MustBePositive),
            Bound::OpenInterval { lower, upper } if value > lower && value < upper => Ok(()),
            Bound::OpenInterval { lower, upper } => {
                Err(ValidationReason::OutOfRange { lower, upper })
            }
        }
    }

    /// Short description for tables and prompts
    pub fn describe(&self) -> String {
        match self {
            Bound::StrictlyPositive => "> 0".to_string(),
            Bound::OpenInterval { lower, upper } => format!("({}, {})", lower, upper),
        }
    }
}

/// Description of one named problem input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Physics symbol, used in error messages (e.g., "ω₀")
    pub symbol: &'static str,
    /// ASCII alias for command lines and JSON (e.g., "omega0")
    pub key: &'static str,
    /// Human description (e.g., "Initial angular speed")
    pub label: &'static str,
    pub unit: Unit,
    pub bound: Bound,
}

impl ParameterSpec {
    pub const fn new(
        symbol: &'static str,
        key: &'static str,
        label: &'static str,
        unit: Unit,
        bound: Bound,
    ) -> Self {
        ParameterSpec {
            symbol,
            key,
            label,
            unit,
            bound,
        }
    }

    /// Positive quantity (mass, length, speed, friction coefficient)
    pub const fn positive(
        symbol: &'static str,
        key: &'static str,
        label: &'static str,
        unit: Unit,
    ) -> Self {
        ParameterSpec::new(symbol, key, label, unit, Bound::StrictlyPositive)
    }

    /// Acute angle in degrees
    pub const fn acute_angle(symbol: &'static str, key: &'static str, label: &'static str) -> Self {
        ParameterSpec::new(symbol, key, label, Unit::Degree, Bound::ACUTE_ANGLE)
    }
}

/// Cross-parameter constraint: `greater` must strictly exceed `lesser`.
///
/// Checked only after every parameter passed its own bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingConstraint {
    pub greater: &'static str,
    pub lesser: &'static str,
}

/// A raw input value, either typed text or an already-parsed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

/// Raw inputs keyed by parameter symbol or key
pub type RawInputs = BTreeMap<String, RawValue>;

/// Build [`RawInputs`] from `(name, value)` pairs.
///
/// ```rust
/// use mech_core::params::raw_inputs;
///
/// let raw = raw_inputs([("M", 1.0.into()), ("alpha", "30".into())]);
/// assert_eq!(raw.len(), 2);
/// ```
pub fn raw_inputs<'a, I>(pairs: I) -> RawInputs
where
    I: IntoIterator<Item = (&'a str, RawValue)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Parameter values that passed validation, in declaration order.
///
/// Only the validator constructs this type, so every value is finite and
/// inside its bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedParameters {
    values: Vec<(&'static str, f64)>,
}

impl ValidatedParameters {
    pub(crate) fn new(values: Vec<(&'static str, f64)>) -> Self {
        ValidatedParameters { values }
    }

    /// Look up a validated value by symbol.
    pub fn get(&self, symbol: &str) -> SolveResult<f64> {
        self.values
            .iter()
            .find(|(name, _)| *name == symbol)
            .map(|(_, value)| *value)
            .ok_or_else(|| SolveError::validation(symbol, ValidationReason::Missing))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_bound() {
        let bound = Bound::StrictlyPositive;
        assert!(bound.check(0.001).is_ok());
        assert_eq!(bound.check(0.0), Err(ValidationReason::MustBePositive));
        assert_eq!(bound.check(-2.0), Err(ValidationReason::MustBePositive));
    }

    #[test]
    fn test_acute_angle_bound() {
        let bound = Bound::ACUTE_ANGLE;
        assert!(bound.check(45.0).is_ok());
        assert!(bound.check(0.0).is_err());
        assert!(bound.check(90.0).is_err());
        assert!(bound.check(120.0).is_err());
        assert_eq!(bound.describe(), "(0, 90)");
    }

    #[test]
    fn test_raw_value_deserialization() {
        let raw: RawInputs = serde_json::from_str(r#"{"M": 1.5, "alpha": "30"}"#).unwrap();
        assert_eq!(raw["M"], RawValue::Number(1.5));
        assert_eq!(raw["alpha"], RawValue::Text("30".to_string()));
    }

    #[test]
    fn test_validated_lookup() {
        let params = ValidatedParameters::new(vec![("M", 2.0), ("m", 0.5)]);
        assert_eq!(params.get("m").unwrap(), 0.5);
        assert!(params.get("μ").is_err());
        assert_eq!(params.len(), 2);
    }
}
