//! # Request Files
//!
//! Batch solve requests stored as JSON, so callers can solve many problems
//! without a terminal session.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "requests": [
//!     {
//!       "label": "Lab 3, part a",
//!       "problem": "bullet-block",
//!       "inputs": { "M": 1.0, "m": 0.01, "v₀": 300, "μ": "0.3" }
//!     }
//!   ]
//! }
//! ```
//!
//! Each request is solved independently; one failing request never stops the
//! others.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mech_core::request::{load_batch, solve_batch};
//! use std::path::Path;
//!
//! let batch = load_batch(Path::new("requests.json")).unwrap();
//! for outcome in solve_batch(&batch) {
//!     println!("{}: {}", outcome.label, outcome.outcome.is_ok());
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{ProblemCatalog, Solution};
use crate::errors::SolveError;
use crate::params::RawInputs;

/// Current schema version for request files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Failure to read or parse a request file.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RequestError {
    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON parse error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

/// A single problem to solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Caller's label for this request; defaults to the problem identifier
    #[serde(default)]
    pub label: Option<String>,

    /// Problem slug or number (e.g., "rotating-rod" or "5")
    pub problem: String,

    /// Raw values keyed by parameter symbol or key
    pub inputs: RawInputs,
}

/// Root of a request file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveBatch {
    pub version: String,
    pub requests: Vec<SolveRequest>,
}

impl SolveBatch {
    pub fn new(requests: Vec<SolveRequest>) -> Self {
        SolveBatch {
            version: SCHEMA_VERSION.to_string(),
            requests,
        }
    }
}

/// Why a single request in a batch did not produce a solution.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestFailure {
    #[error(transparent)]
    UnknownProblem(#[from] crate::errors::CatalogError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Outcome of one request in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestOutcome {
    pub label: String,
    pub problem: String,
    #[serde(with = "outcome_serde")]
    pub outcome: Result<Solution, RequestFailure>,
}

mod outcome_serde {
    use serde::{Serialize, Serializer};

    use super::RequestFailure;
    use crate::catalog::Solution;

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Tagged<'a> {
        Solution(&'a Solution),
        Error(&'a RequestFailure),
    }

    pub fn serialize<S>(
        outcome: &Result<Solution, RequestFailure>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match outcome {
            Ok(solution) => Tagged::Solution(solution).serialize(serializer),
            Err(failure) => Tagged::Error(failure).serialize(serializer),
        }
    }
}

/// Load a batch from a JSON request file.
///
/// # Errors
///
/// * `RequestError::FileError` - the file cannot be read
/// * `RequestError::SerializationError` - the contents are not a valid batch
/// * `RequestError::VersionMismatch` - the major version differs
pub fn load_batch(path: &Path) -> Result<SolveBatch, RequestError> {
    let contents = fs::read_to_string(path).map_err(|e| RequestError::FileError {
        operation: "read".to_string(),
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let batch = parse_batch(&contents).map_err(|err| match err {
        RequestError::SerializationError { reason } => RequestError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })?;

    info!(path = %path.display(), requests = batch.requests.len(), "loaded request file");
    Ok(batch)
}

/// Parse a batch from JSON text and check its version.
pub fn parse_batch(contents: &str) -> Result<SolveBatch, RequestError> {
    let batch: SolveBatch =
        serde_json::from_str(contents).map_err(|e| RequestError::SerializationError {
            reason: e.to_string(),
        })?;
    validate_version(&batch.version)?;
    Ok(batch)
}

/// Solve every request in order.
pub fn solve_batch(batch: &SolveBatch) -> Vec<RequestOutcome> {
    batch.requests.iter().map(solve_request).collect()
}

/// Solve one request against the global catalog.
pub fn solve_request(request: &SolveRequest) -> RequestOutcome {
    let label = request
        .label
        .clone()
        .unwrap_or_else(|| request.problem.clone());

    let outcome = ProblemCatalog::global()
        .lookup(&request.problem)
        .map_err(RequestFailure::from)
        .and_then(|problem| problem.solve(&request.inputs).map_err(RequestFailure::from));

    if let Err(failure) = &outcome {
        warn!(label = %label, error = %failure, "request failed");
    }

    RequestOutcome {
        label,
        problem: request.problem.clone(),
        outcome,
    }
}

/// Only the major version has to match.
fn validate_version(file_version: &str) -> Result<(), RequestError> {
    let major = |version: &str| {
        version
            .split('.')
            .next()
            .and_then(|part| part.trim().parse::<u32>().ok())
    };

    match (major(file_version), major(SCHEMA_VERSION)) {
        (Some(file), Some(current)) if file == current => Ok(()),
        _ => Err(RequestError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        }),
    }
}
