//! # Error Types
//!
//! Structured error types for mech_core. A solve attempt fails in exactly one
//! of two ways:
//!
//! - [`SolveError::Validation`] - a raw input is missing, not a number, or
//!   outside its physical range. Detected before any formula runs.
//! - [`SolveError::Domain`] - every input is individually valid, but together
//!   they describe a configuration the physics cannot produce (for example a
//!   cosine argument that reaches 1).
//!
//! Both are ordinary values returned from `solve`; neither is fatal.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::errors::{SolveError, SolveResult, ValidationReason};
//!
//! fn check_length(length_m: f64) -> SolveResult<f64> {
//!     if length_m <= 0.0 {
//!         return Err(SolveError::validation("L", ValidationReason::MustBePositive));
//!     }
//!     Ok(length_m)
//! }
//!
//! let err = check_length(-1.0).unwrap_err();
//! assert_eq!(err.error_code(), "VALIDATION_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mech_core solve operations
pub type SolveResult<T> = Result<T, SolveError>;

/// Why a single raw parameter (or a pair of them) was rejected.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationReason {
    /// No value was supplied under the parameter's symbol or key
    #[error("missing")]
    Missing,

    /// Text did not parse as a finite real number
    #[error("not a number")]
    NotANumber,

    /// Value was zero or negative
    #[error("must be positive")]
    MustBePositive,

    /// Value fell outside an open interval
    #[error("out of range ({lower},{upper})")]
    OutOfRange { lower: f64, upper: f64 },

    /// Value did not exceed the parameter it is ordered against
    #[error("must exceed {other}")]
    MustExceed { other: String },
}

/// Structured error returned by a solve call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SolveError {
    /// A raw input value is invalid
    #[error("Invalid input for '{parameter}': {reason}")]
    Validation {
        parameter: String,
        reason: ValidationReason,
    },

    /// The inputs describe a physically infeasible configuration
    #[error("Physically infeasible configuration ({problem}): {reason}")]
    Domain { problem: String, reason: String },
}

impl SolveError {
    /// Create a Validation error
    pub fn validation(parameter: impl Into<String>, reason: ValidationReason) -> Self {
        SolveError::Validation {
            parameter: parameter.into(),
            reason,
        }
    }

    /// Create a Domain error
    pub fn domain(problem: impl Into<String>, reason: impl Into<String>) -> Self {
        SolveError::Domain {
            problem: problem.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied bad input (as opposed to infeasible physics)
    pub fn is_validation(&self) -> bool {
        matches!(self, SolveError::Validation { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SolveError::Validation { .. } => "VALIDATION_ERROR",
            SolveError::Domain { .. } => "DOMAIN_ERROR",
        }
    }

    /// Human-readable category, suitable as a dialog title
    pub fn category(&self) -> &'static str {
        match self {
            SolveError::Validation { .. } => "invalid input",
            SolveError::Domain { .. } => "physically infeasible configuration",
        }
    }
}

/// Error raised when a problem identifier does not name a catalog entry.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    #[error("Unknown problem: '{ident}'")]
    UnknownProblem { ident: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let reason = ValidationReason::MustExceed { other: "ω₀".into() };
        let error = SolveError::validation("ω", reason);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SolveError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
        assert!(json.contains("\"type\":\"Validation\""));
    }

    #[test]
    fn test_error_messages() {
        let reason = ValidationReason::OutOfRange {
            lower: 0.0,
            upper: 90.0,
        };
        let err = SolveError::validation("θ", reason);
        assert_eq!(err.to_string(), "Invalid input for 'θ': out of range (0,90)");

        let err = SolveError::domain("rotating-rod", "rod does not deflect at this speed");
        assert!(err.to_string().ends_with("rod does not deflect at this speed"));
    }

    #[test]
    fn test_error_codes() {
        let validation = SolveError::validation("M", ValidationReason::NotANumber);
        let domain = SolveError::domain("pendulum-collision", "cord never slackens");

        assert_eq!(validation.error_code(), "VALIDATION_ERROR");
        assert_eq!(domain.error_code(), "DOMAIN_ERROR");
        assert!(validation.is_validation());
        assert!(!domain.is_validation());
        assert_ne!(validation.category(), domain.category());
    }
}
