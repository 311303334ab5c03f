//! Generate PROBLEMS.md from the problem catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-problems
//! ```
//!
//! The generated file is written to `mech_core/PROBLEMS.md`.

use std::fs;
use std::path::Path;

use mech_core::catalog::ProblemCatalog;
use mech_core::reference::generate_catalog_markdown;

fn main() {
    println!("Generating PROBLEMS.md...");

    let markdown = generate_catalog_markdown(ProblemCatalog::global());

    // Relative to workspace root
    let output_path = Path::new("mech_core/PROBLEMS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
