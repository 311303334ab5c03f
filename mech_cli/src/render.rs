//! Plain-text rendering of catalog entries and results.

use mech_core::catalog::{ProblemDefinition, Solution};
use mech_core::request::RequestOutcome;

pub fn problem_heading(problem: &ProblemDefinition) -> String {
    format!("Problem {}: {}", problem.id.number(), problem.title)
}

pub fn problem_list<'a>(problems: impl Iterator<Item = &'a ProblemDefinition>) -> String {
    let mut output = String::new();
    for problem in problems {
        output.push_str(&format!(
            "  {}  {:<20} {}\n",
            problem.id.number(),
            problem.id.slug(),
            problem.title
        ));
    }
    output
}

pub fn problem_details(problem: &ProblemDefinition) -> String {
    let mut output = String::new();
    output.push_str(&problem_heading(problem));
    output.push_str(&format!("\nIdentifier: {}\n\n", problem.id.slug()));
    output.push_str(problem.statement);
    output.push_str("\n\nInputs:\n");
    for spec in &problem.parameters {
        output.push_str(&format!(
            "  {:<4} {:<14} {:<24} {:<6} {}\n",
            spec.symbol,
            spec.key,
            spec.label,
            spec.unit.table_symbol(),
            spec.bound.describe()
        ));
    }
    for constraint in &problem.constraints {
        output.push_str(&format!("  ({} must exceed {})\n", constraint.greater, constraint.lesser));
    }
    output.push_str("\nOutputs:\n");
    for field in &problem.outputs {
        output.push_str(&format!(
            "  {:<4} {} [{}], {} decimals\n",
            field.symbol,
            field.name,
            field.unit.table_symbol(),
            field.precision
        ));
    }
    output.push_str("\nFormulas:\n");
    for formula in &problem.formulas {
        output.push_str(&format!("  {}\n", formula));
    }
    output
}

pub fn solution(problem: &ProblemDefinition, solution: &Solution) -> String {
    let mut output = problem_heading(problem);
    output.push('\n');
    for quantity in &solution.formatted {
        output.push_str(&format!("  {}\n", quantity));
    }
    output
}

pub fn batch(outcomes: &[RequestOutcome]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        output.push_str(&format!("[{}] {}\n", outcome.label, outcome.problem));
        match &outcome.outcome {
            Ok(solution) => {
                for quantity in &solution.formatted {
                    output.push_str(&format!("  {}\n", quantity));
                }
            }
            Err(failure) => output.push_str(&format!("  Error: {}\n", failure)),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_core::{raw_inputs, ProblemCatalog};

    #[test]
    fn test_solution_lines() {
        let problem = ProblemCatalog::global().lookup("bullet-block").unwrap();
        let raw = raw_inputs([
            ("M", 1.0.into()),
            ("m", 0.01.into()),
            ("v₀", 300.0.into()),
            ("μ", 0.3.into()),
        ]);
        let text = solution(problem, &problem.solve(&raw).unwrap());
        assert!(text.starts_with("Problem 2: Embedded bullet on a table"));
        assert!(text.contains("Speed after impact (u): 2.970 m/s"));
        assert!(text.contains("Distance to stop (S): 1.499 m"));
    }

    #[test]
    fn test_list_has_every_problem() {
        let text = problem_list(ProblemCatalog::global().iter());
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("rotating-rod"));
    }
}
