//! # Problem Catalog
//!
//! Registry of every solvable problem and the generic solve pipeline:
//!
//! ```text
//! raw inputs ──validate──▶ ValidatedParameters ──evaluate──▶ DerivedQuantity[] ──▶ Solution
//!      │                          │
//!      └── SolveError::Validation └── SolveError::Domain
//! ```
//!
//! The built-in catalog is created once per process and is read-only
//! afterwards, so concurrent callers share it freely. Adding a problem means
//! adding a [`ProblemId`] variant and its module; nothing else in the
//! pipeline changes.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::catalog::ProblemCatalog;
//! use mech_core::params::raw_inputs;
//!
//! let problem = ProblemCatalog::global().lookup("bullet-block").unwrap();
//! let raw = raw_inputs([
//!     ("M", 1.0.into()),
//!     ("m", 0.01.into()),
//!     ("v₀", "300".into()),
//!     ("friction", 0.3.into()),
//! ]);
//!
//! let solution = problem.solve(&raw).unwrap();
//! assert_eq!(solution.formatted[0].value, "2.970");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{CatalogError, SolveError, SolveResult};
use crate::formatter::{format_quantities, DerivedQuantity, FormattedQuantity};
use crate::params::{OrderingConstraint, ParameterSpec, RawInputs};
use crate::problems::ProblemId;
use crate::units::Unit;
use crate::validator::validate;

static CATALOG: Lazy<ProblemCatalog> = Lazy::new(ProblemCatalog::builtin);

/// Description of one output of a problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputField {
    /// Human label (e.g., "Rod tension")
    pub name: &'static str,
    pub symbol: &'static str,
    pub unit: Unit,
    /// Decimal digits for display
    pub precision: u8,
}

impl OutputField {
    pub const fn new(name: &'static str, symbol: &'static str, unit: Unit, precision: u8) -> Self {
        OutputField {
            name,
            symbol,
            unit,
            precision,
        }
    }
}

/// Full input/output contract of one problem.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDefinition {
    pub id: ProblemId,
    pub title: &'static str,
    /// Problem statement as given to students
    pub statement: &'static str,
    /// Inputs, in prompt and validation order
    pub parameters: Vec<ParameterSpec>,
    /// Cross-parameter checks run after per-parameter validation
    pub constraints: Vec<OrderingConstraint>,
    /// Outputs, in the order the evaluator returns them
    pub outputs: Vec<OutputField>,
    /// Formulas, for reference documentation
    pub formulas: Vec<&'static str>,
}

impl ProblemDefinition {
    /// Validate, evaluate and format in one call.
    ///
    /// # Returns
    ///
    /// * `Ok(Solution)` - every output, in output-field order
    /// * `Err(SolveError::Validation)` - first rejected raw input
    /// * `Err(SolveError::Domain)` - inputs are valid but physically infeasible
    #[instrument(level = "debug", skip(self, raw), fields(problem = %self.id))]
    pub fn solve(&self, raw: &RawInputs) -> SolveResult<Solution> {
        let params = validate(raw, &self.parameters, &self.constraints)?;
        let values = self.id.evaluate(&params)?;

        let quantities = self
            .outputs
            .iter()
            .zip(values)
            .map(|(field, value)| {
                if !value.is_finite() {
                    return Err(SolveError::domain(
                        self.id.slug(),
                        format!("{} is not finite", field.symbol),
                    ));
                }
                Ok(DerivedQuantity {
                    name: field.name.to_string(),
                    symbol: field.symbol.to_string(),
                    unit: field.unit,
                    value,
                    precision: field.precision,
                })
            })
            .collect::<SolveResult<Vec<_>>>()?;

        debug!(outputs = quantities.len(), "evaluation finished");

        Ok(Solution {
            problem: self.id,
            formatted: format_quantities(&quantities),
            quantities,
        })
    }

    /// Find a parameter by symbol or key.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters
            .iter()
            .find(|spec| spec.symbol == name || spec.key == name)
    }
}

/// Successful outcome of a solve call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub problem: ProblemId,
    /// Unrounded values
    pub quantities: Vec<DerivedQuantity>,
    /// Display-ready values, same order as `quantities`
    pub formatted: Vec<FormattedQuantity>,
}

/// Registry of problem definitions.
#[derive(Debug, Clone)]
pub struct ProblemCatalog {
    problems: Vec<ProblemDefinition>,
}

impl ProblemCatalog {
    /// The five built-in problems, in problem-number order.
    pub fn builtin() -> Self {
        ProblemCatalog {
            problems: ProblemId::ALL.iter().map(ProblemId::definition).collect(),
        }
    }

    /// Process-wide shared catalog.
    pub fn global() -> &'static ProblemCatalog {
        &CATALOG
    }

    /// Definitions are stored in problem-number order, one per [`ProblemId`].
    pub fn get(&self, id: ProblemId) -> &ProblemDefinition {
        &self.problems[usize::from(id.number()) - 1]
    }

    /// Resolve a slug or problem number to its definition.
    pub fn lookup(&self, ident: &str) -> Result<&ProblemDefinition, CatalogError> {
        let id: ProblemId = ident.parse()?;
        Ok(self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProblemDefinition> {
        self.problems.iter()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Solve a problem from the global catalog.
///
/// # Example
///
/// ```rust
/// use mech_core::catalog::solve;
/// use mech_core::params::raw_inputs;
/// use mech_core::problems::ProblemId;
///
/// let raw = raw_inputs([
///     ("m", 1.0.into()),
///     ("L", 1.0.into()),
///     ("ω₀", 1.0.into()),
///     ("ω", 3.1.into()),
/// ]);
/// let err = solve(ProblemId::RotatingRod, &raw).unwrap_err();
/// assert_eq!(err.error_code(), "DOMAIN_ERROR");
/// ```
pub fn solve(id: ProblemId, raw: &RawInputs) -> SolveResult<Solution> {
    ProblemCatalog::global().get(id).solve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_PRECISION, MIN_PRECISION};
    use crate::errors::ValidationReason;
    use crate::params::{raw_inputs, RawValue};

    fn valid_inputs(id: ProblemId) -> RawInputs {
        let pairs: Vec<(&str, RawValue)> = match id {
            ProblemId::PendulumCart => vec![
                ("M", 1.0.into()),
                ("m", 0.1.into()),
                ("l", 0.5.into()),
                ("α", 30.0.into()),
            ],
            ProblemId::BulletBlock => vec![
                ("M", 1.0.into()),
                ("m", 0.01.into()),
                ("v₀", 300.0.into()),
                ("μ", 0.3.into()),
            ],
            ProblemId::PendulumCollision => vec![
                ("m₁", 0.2.into()),
                ("m₂", 1.0.into()),
                ("L", 1.0.into()),
                ("θ", 60.0.into()),
            ],
            ProblemId::WedgeBounce => vec![
                ("M", 2.0.into()),
                ("m", 1.0.into()),
                ("α", 30.0.into()),
                ("H", 0.5.into()),
            ],
            ProblemId::RotatingRod => vec![
                ("m", 0.5.into()),
                ("L", 1.0.into()),
                ("ω₀", 2.0.into()),
                ("ω", 5.0.into()),
            ],
        };
        raw_inputs(pairs)
    }

    fn formatted_values(solution: &Solution) -> Vec<&str> {
        solution.formatted.iter().map(|f| f.value.as_str()).collect()
    }

    #[test]
    fn test_catalog_has_five_problems() {
        let catalog = ProblemCatalog::global();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<_> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, ProblemId::ALL.to_vec());
    }

    #[test]
    fn test_get_returns_matching_definition() {
        let catalog = ProblemCatalog::global();
        for id in ProblemId::ALL {
            assert_eq!(catalog.get(id).id, id);
        }
    }

    #[test]
    fn test_definitions_are_well_formed() {
        for problem in ProblemCatalog::global().iter() {
            assert!(!problem.parameters.is_empty());
            assert!((2..=3).contains(&problem.outputs.len()), "{}", problem.id);
            for output in &problem.outputs {
                assert!((MIN_PRECISION..=MAX_PRECISION).contains(&output.precision));
            }
            for constraint in &problem.constraints {
                assert!(problem.parameter(constraint.greater).is_some());
                assert!(problem.parameter(constraint.lesser).is_some());
            }
            let mut keys: Vec<_> = problem.parameters.iter().map(|p| p.key).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), problem.parameters.len());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = ProblemCatalog::global();
        assert_eq!(catalog.lookup("5").unwrap().id, ProblemId::RotatingRod);
        assert_eq!(
            catalog.lookup("slingshot").unwrap_err(),
            CatalogError::UnknownProblem {
                ident: "slingshot".to_string()
            }
        );
    }

    #[test]
    fn test_every_problem_solves() {
        for id in ProblemId::ALL {
            let solution = solve(id, &valid_inputs(id)).unwrap();
            let definition = id.definition();
            assert_eq!(solution.quantities.len(), definition.outputs.len());
            assert_eq!(solution.formatted.len(), definition.outputs.len());
            for quantity in &solution.quantities {
                assert!(quantity.value.is_finite());
                assert!(quantity.value >= 0.0, "{} {}", id, quantity.symbol);
            }
        }
    }

    #[test]
    fn test_pendulum_cart_formatted() {
        let solution =
            solve(ProblemId::PendulumCart, &valid_inputs(ProblemId::PendulumCart)).unwrap();
        assert_eq!(formatted_values(&solution), vec!["0.1093", "0.10"]);
        assert_eq!(solution.formatted[0].unit, "m/s");
    }

    #[test]
    fn test_bullet_block_formatted() {
        let solution =
            solve(ProblemId::BulletBlock, &valid_inputs(ProblemId::BulletBlock)).unwrap();
        assert_eq!(formatted_values(&solution), vec!["2.970", "1.499"]);
    }

    #[test]
    fn test_other_problems_formatted() {
        let collision = solve(
            ProblemId::PendulumCollision,
            &valid_inputs(ProblemId::PendulumCollision),
        )
        .unwrap();
        assert_eq!(formatted_values(&collision), vec!["1.044", "83.62", "0.222"]);

        let wedge = solve(ProblemId::WedgeBounce, &valid_inputs(ProblemId::WedgeBounce)).unwrap();
        assert_eq!(formatted_values(&wedge), vec!["1.044", "0.302", "1.92"]);

        let rod = solve(ProblemId::RotatingRod, &valid_inputs(ProblemId::RotatingRod)).unwrap();
        assert_eq!(formatted_values(&rod), vec!["66.90", "13.590", "7.268"]);
    }

    #[test]
    fn test_idempotent() {
        for id in ProblemId::ALL {
            let first = solve(id, &valid_inputs(id)).unwrap();
            let second = solve(id, &valid_inputs(id)).unwrap();
            for (a, b) in first.quantities.iter().zip(&second.quantities) {
                assert_eq!(a.value.to_bits(), b.value.to_bits());
            }
        }
    }

    #[test]
    fn test_rotating_rod_ordering_is_validation_error() {
        let mut raw = valid_inputs(ProblemId::RotatingRod);
        raw.insert("ω".to_string(), 2.0.into());
        let err = solve(ProblemId::RotatingRod, &raw).unwrap_err();
        assert_eq!(
            err,
            SolveError::validation(
                "ω",
                ValidationReason::MustExceed {
                    other: "ω₀".to_string()
                }
            )
        );
    }

    #[test]
    fn test_mixed_json_inputs_solve() {
        let raw: RawInputs = serde_json::from_str(
            r#"{ "M": 1.0, "bob_mass": "0.1", "l": 0.5, "release_angle": "30" }"#,
        )
        .unwrap();
        let solution = solve(ProblemId::PendulumCart, &raw).unwrap();
        assert_eq!(formatted_values(&solution), vec!["0.1093", "0.10"]);
    }

    #[test]
    fn test_heavy_rod_formats_finite_values() {
        let raw = raw_inputs([
            ("m", 1e306.into()),
            ("L", 1.0.into()),
            ("ω₀", 1.0.into()),
            ("ω", 10.0.into()),
        ]);
        let solution = solve(ProblemId::RotatingRod, &raw).unwrap();
        assert_eq!(solution.formatted[0].value, "84.37");
        for (quantity, formatted) in solution.quantities.iter().zip(&solution.formatted) {
            assert!(quantity.value.is_finite());
            assert!(!formatted.value.contains("inf"), "{}", formatted.value);
        }
    }

    #[test]
    fn test_rotating_rod_slow_spin_is_domain_error() {
        let raw = raw_inputs([
            ("m", 1.0.into()),
            ("L", 1.0.into()),
            ("ω₀", 1.0.into()),
            ("ω", 3.1.into()),
        ]);
        let err = solve(ProblemId::RotatingRod, &raw).unwrap_err();
        assert_eq!(
            err,
            SolveError::domain("rotating-rod", "rod does not deflect at this speed")
        );
    }

    #[test]
    fn test_pendulum_collision_taut_cord_is_domain_error() {
        let raw = raw_inputs([
            ("m1", 1.0.into()),
            ("m2", 1.0.into()),
            ("cord_length", 1.0.into()),
            ("theta", 80.0.into()),
        ]);
        let err = solve(ProblemId::PendulumCollision, &raw).unwrap_err();
        assert_eq!(err, SolveError::domain("pendulum-collision", "cord never slackens"));
    }

    #[test]
    fn test_angle_outside_range_rejected() {
        for id in [ProblemId::PendulumCart, ProblemId::PendulumCollision, ProblemId::WedgeBounce] {
            let definition = id.definition();
            let angle = definition
                .parameters
                .iter()
                .find(|p| p.unit == Unit::Degree)
                .unwrap();
            let mut raw = valid_inputs(id);
            raw.insert(angle.symbol.to_string(), 95.0.into());
            let err = solve(id, &raw).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("out of range (0,90)"));
        }
    }

    #[test]
    fn test_solution_serialization() {
        let solution =
            solve(ProblemId::WedgeBounce, &valid_inputs(ProblemId::WedgeBounce)).unwrap();
        let json = serde_json::to_string_pretty(&solution).unwrap();
        assert!(json.contains("\"problem\": \"wedge-bounce\""));
        let roundtrip: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.formatted, solution.formatted);
    }
}
