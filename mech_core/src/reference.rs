//! # Catalog Reference
//!
//! Renders every problem definition (statement, inputs, outputs, formulas)
//! as a Markdown document, so the formulas can be audited in one place.
//!
//! ```rust
//! use mech_core::catalog::ProblemCatalog;
//! use mech_core::reference::generate_catalog_markdown;
//!
//! let markdown = generate_catalog_markdown(ProblemCatalog::global());
//! assert!(markdown.contains("## 5. Flexible rotating rod with bob"));
//! ```

use crate::catalog::{ProblemCatalog, ProblemDefinition};
use crate::constants::{GRAVITY_M_S2, NEGLIGIBLE_VELOCITY_M_S};

/// Render the whole catalog.
pub fn generate_catalog_markdown(catalog: &ProblemCatalog) -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Mechsolve Problem Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-problems`

"#,
    );

    output.push_str("## Conventions\n\n");
    output.push_str(&format!("- g = {} m/s²\n", GRAVITY_M_S2));
    output.push_str("- Angles are entered in degrees; every other quantity is SI\n");
    output.push_str(&format!(
        "- Speeds below {:e} m/s count as no motion\n",
        NEGLIGIBLE_VELOCITY_M_S
    ));
    output.push_str("- Results are rounded half away from zero\n\n---\n\n");

    for problem in catalog.iter() {
        output.push_str(&problem_markdown(problem));
    }

    output
}

/// Render one problem section.
pub fn problem_markdown(problem: &ProblemDefinition) -> String {
    let mut section = String::new();

    section.push_str(&format!("## {}. {}\n\n", problem.id.number(), problem.title));
    section.push_str(&format!("Identifier: `{}`\n\n", problem.id.slug()));
    section.push_str(&format!("{}\n\n", problem.statement));

    section.push_str("**Inputs:**\n\n");
    section.push_str("| Symbol | Key | Description | Units | Allowed |\n");
    section.push_str("|--------|-----|-------------|-------|---------|\n");
    for spec in &problem.parameters {
        section.push_str(&format!(
            "| {} | `{}` | {} | {} | {} |\n",
            spec.symbol,
            spec.key,
            spec.label,
            spec.unit.table_symbol(),
            spec.bound.describe()
        ));
    }
    section.push('\n');

    for constraint in &problem.constraints {
        section.push_str(&format!(
            "Additionally {} must exceed {}.\n\n",
            constraint.greater, constraint.lesser
        ));
    }

    section.push_str("**Outputs:**\n\n");
    section.push_str("| Symbol | Description | Units | Decimals |\n");
    section.push_str("|--------|-------------|-------|----------|\n");
    for output in &problem.outputs {
        section.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            output.symbol,
            output.name,
            output.unit.table_symbol(),
            output.precision
        ));
    }
    section.push('\n');

    section.push_str("**Formulas:**\n\n");
    for formula in &problem.formulas {
        section.push_str(&format!("- `{}`\n", formula));
    }
    section.push_str("\n---\n\n");

    section
}
