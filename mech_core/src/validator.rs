//! # Input Validation
//!
//! Turns raw caller input into [`ValidatedParameters`], or reports the first
//! violated constraint. Checks run in declaration order:
//!
//! 1. presence (by symbol, then by key)
//! 2. parse as a finite real number
//! 3. the parameter's own [`Bound`](crate::params::Bound)
//! 4. cross-parameter [`OrderingConstraint`]s, once every value passed 1-3
//!
//! ## Example
//!
//! ```rust
//! use mech_core::params::{raw_inputs, ParameterSpec};
//! use mech_core::units::Unit;
//! use mech_core::validator::validate;
//!
//! let specs = [ParameterSpec::positive("L", "length", "Cord length", Unit::Meter)];
//! let raw = raw_inputs([("length", "1.25".into())]);
//!
//! let params = validate(&raw, &specs, &[]).unwrap();
//! assert_eq!(params.get("L").unwrap(), 1.25);
//! ```

use tracing::debug;

use crate::errors::{SolveError, SolveResult, ValidationReason};
use crate::params::{OrderingConstraint, ParameterSpec, RawInputs, RawValue, ValidatedParameters};

/// Validate raw inputs against the given specs and ordering constraints.
pub fn validate(
    raw: &RawInputs,
    specs: &[ParameterSpec],
    constraints: &[OrderingConstraint],
) -> SolveResult<ValidatedParameters> {
    let mut values = Vec::with_capacity(specs.len());

    for spec in specs {
        let raw_value = raw
            .get(spec.symbol)
            .or_else(|| raw.get(spec.key))
            .ok_or_else(|| SolveError::validation(spec.symbol, ValidationReason::Missing))?;

        let value = parse_value(raw_value)
            .ok_or_else(|| SolveError::validation(spec.symbol, ValidationReason::NotANumber))?;

        spec.bound
            .check(value)
            .map_err(|reason| SolveError::validation(spec.symbol, reason))?;

        values.push((spec.symbol, value));
    }

    let params = ValidatedParameters::new(values);

    for constraint in constraints {
        let greater = params.get(constraint.greater)?;
        let lesser = params.get(constraint.lesser)?;
        if greater <= lesser {
            return Err(SolveError::validation(
                constraint.greater,
                ValidationReason::MustExceed {
                    other: constraint.lesser.to_string(),
                },
            ));
        }
    }

    debug!(count = params.len(), "parameters validated");
    Ok(params)
}

/// Parse a raw value into a finite f64.
fn parse_value(raw: &RawValue) -> Option<f64> {
    let value = match raw {
        RawValue::Number(value) => *value,
        RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}
