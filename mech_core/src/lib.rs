//! # mech_core - Mechanics Problem Solving Engine
//!
//! `mech_core` solves a fixed catalog of classical mechanics problems with
//! closed-form formulas. Raw inputs (text or numbers) are validated against
//! each problem's physical constraints, evaluated, and rounded for display.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every solve is a pure function of its inputs
//! - **Two failure kinds**: invalid input vs. physically infeasible configuration
//! - **Declarative catalog**: problems are data plus one formula function
//!
//! ## Quick Start
//!
//! ```rust
//! use mech_core::{solve, raw_inputs, ProblemId};
//!
//! let raw = raw_inputs([
//!     ("cart_mass", 1.0.into()),
//!     ("bob_mass", 0.1.into()),
//!     ("rod_length", 0.5.into()),
//!     ("release_angle", "30".into()),
//! ]);
//!
//! let solution = solve(ProblemId::PendulumCart, &raw).unwrap();
//! assert_eq!(solution.formatted[0].value, "0.1093");
//! assert_eq!(solution.formatted[1].value, "0.10");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Problem registry and the solve pipeline
//! - [`problems`] - The five problem formulas
//! - [`validator`] - Raw input validation
//! - [`formatter`] - Rounding and unit labels
//! - [`params`] - Parameter specs and raw/validated values
//! - [`request`] - JSON batch request files
//! - [`reference`] - Markdown reference generation
//! - [`units`] - Unit labels and angle wrappers
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod formatter;
pub mod params;
pub mod problems;
pub mod reference;
pub mod request;
pub mod units;
pub mod validator;

// Re-export commonly used types at crate root for convenience
pub use catalog::{solve, ProblemCatalog, ProblemDefinition, Solution};
pub use errors::{CatalogError, SolveError, SolveResult, ValidationReason};
pub use formatter::{DerivedQuantity, FormattedQuantity};
pub use params::{raw_inputs, RawInputs, RawValue};
pub use problems::ProblemId;
