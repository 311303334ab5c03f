//! # Mechsolve CLI Application
//!
//! Terminal front end for the mechanics problem catalog. Parameters can be
//! passed as `-p name=value` or typed in when prompted; results are printed
//! as text or JSON.

mod render;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mech_core::catalog::{ProblemCatalog, ProblemDefinition};
use mech_core::errors::{CatalogError, SolveError};
use mech_core::params::{RawInputs, RawValue};
use mech_core::reference::generate_catalog_markdown;
use mech_core::request::{load_batch, solve_batch, RequestError};

#[derive(Parser)]
#[command(name = "mech_cli")]
#[command(about = "Mechsolve CLI - closed-form mechanics problem solver", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List available problems
    List,
    /// Show a problem's statement, inputs, outputs and formulas
    Describe {
        /// Problem slug or number (e.g., "wedge-bounce" or "4")
        problem: String,
    },
    /// Solve a problem
    Solve {
        /// Problem slug or number (e.g., "wedge-bounce" or "4")
        problem: String,
        /// Parameter value as name=value, by symbol or key (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_assignment)]
        params: Vec<(String, String)>,
        /// Do not prompt for parameters missing from the command line
        #[arg(long)]
        no_prompt: bool,
    },
    /// Solve every request in a JSON request file
    Batch {
        /// Path to the request file
        path: PathBuf,
    },
    /// Write the Markdown reference of all problems
    Reference {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Everything that can stop a command.
#[derive(Error, Debug, Serialize)]
#[serde(untagged)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Unknown parameter '{name}' for {problem}")]
    UnknownParameter { problem: String, name: String },

    #[error("{operation} failed: {reason}")]
    Io { operation: String, reason: String },

    /// Some requests in a batch failed; details were already printed
    #[error("{failed} of {total} requests failed")]
    BatchFailures { failed: usize, total: usize },
}

impl CliError {
    fn io(operation: &str, err: io::Error) -> Self {
        CliError::Io {
            operation: operation.to_string(),
            reason: err.to_string(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            // Batch results were already written as JSON
            let already_reported = matches!(e, CliError::BatchFailures { .. });
            if cli.format == OutputFormat::Json && !already_reported {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    println!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `-v` flags win over `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let catalog = ProblemCatalog::global();

    match &cli.command {
        Commands::List => cmd_list(catalog, cli.format),
        Commands::Describe { problem } => cmd_describe(catalog.lookup(problem)?, cli.format),
        Commands::Solve {
            problem,
            params,
            no_prompt,
        } => cmd_solve(catalog.lookup(problem)?, params, !no_prompt, cli.format),
        Commands::Batch { path } => cmd_batch(path, cli.format),
        Commands::Reference { output } => cmd_reference(catalog, output.as_deref()),
    }
}

fn cmd_list(catalog: &ProblemCatalog, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            println!("Available problems:");
            print!("{}", render::problem_list(catalog.iter()));
        }
        OutputFormat::Json => {
            let entries: Vec<_> = catalog
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "number": p.id.number(),
                        "title": p.title,
                    })
                })
                .collect();
            print_json(&entries)?;
        }
    }
    Ok(())
}

fn cmd_describe(problem: &ProblemDefinition, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => print!("{}", render::problem_details(problem)),
        OutputFormat::Json => print_json(problem)?,
    }
    Ok(())
}

fn cmd_solve(
    problem: &ProblemDefinition,
    assignments: &[(String, String)],
    prompt: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    if let Some((name, _)) = assignments
        .iter()
        .find(|(name, _)| problem.parameter(name).is_none())
    {
        return Err(CliError::UnknownParameter {
            problem: problem.id.to_string(),
            name: name.clone(),
        });
    }

    let mut raw: RawInputs = assignments
        .iter()
        .map(|(name, value)| (name.clone(), RawValue::Text(value.clone())))
        .collect();

    if prompt {
        prompt_missing(problem, &mut raw)?;
    }

    debug!(problem = %problem.id, supplied = raw.len(), "solving");
    let solution = problem.solve(&raw)?;

    match format {
        OutputFormat::Text => print!("{}", render::solution(problem, &solution)),
        OutputFormat::Json => print_json(&solution)?,
    }
    Ok(())
}

fn cmd_batch(path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let batch = load_batch(path)?;
    let outcomes = solve_batch(&batch);

    match format {
        OutputFormat::Text => print!("{}", render::batch(&outcomes)),
        OutputFormat::Json => print_json(&outcomes)?,
    }

    let failed = outcomes.iter().filter(|o| o.outcome.is_err()).count();
    if failed > 0 {
        return Err(CliError::BatchFailures {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn cmd_reference(catalog: &ProblemCatalog, output: Option<&Path>) -> Result<(), CliError> {
    let markdown = generate_catalog_markdown(catalog);
    match output {
        Some(path) => {
            fs::write(path, &markdown).map_err(|e| CliError::io("write reference", e))?;
            info!(path = %path.display(), bytes = markdown.len(), "reference written");
            println!("Wrote {}", path.display());
        }
        None => print!("{}", markdown),
    }
    Ok(())
}

/// Ask on stdin for every parameter not supplied on the command line.
///
/// Prompts go to stderr so stdout only carries results. Stops quietly at end of input; the validator then reports what is missing.
fn prompt_missing(problem: &ProblemDefinition, raw: &mut RawInputs) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    for spec in &problem.parameters {
        if raw.contains_key(spec.symbol) || raw.contains_key(spec.key) {
            continue;
        }

        eprint!(
            "{} ({}), {} {}: ",
            spec.label,
            spec.symbol,
            spec.unit.table_symbol(),
            spec.bound.describe()
        );
        io::stderr().flush().map_err(|e| CliError::io("flush stderr", e))?;

        let mut input = String::new();
        let read = reader
            .read_line(&mut input)
            .map_err(|e| CliError::io("read stdin", e))?;
        if read == 0 {
            eprintln!();
            break;
        }

        let value = input.trim();
        if !value.is_empty() {
            raw.insert(spec.symbol.to_string(), RawValue::Text(value.to_string()));
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CliError::Io {
        operation: "serialize output".to_string(),
        reason: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

/// Parse a `name=value` pair.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{}'", s));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("omega0=2.5").unwrap(),
            ("omega0".to_string(), "2.5".to_string())
        );
        assert_eq!(
            parse_assignment("ω = 5").unwrap(),
            ("ω".to_string(), "5".to_string())
        );
        assert!(parse_assignment("omega").is_err());
        assert!(parse_assignment("=3").is_err());
    }

    #[test]
    fn test_cli_parses_repeated_params() {
        let cli = Cli::try_parse_from([
            "mech_cli", "solve", "rotating-rod", "-p", "m=1", "-p", "L=1", "--no-prompt",
        ])
        .unwrap();
        match cli.command {
            Commands::Solve { problem, params, no_prompt } => {
                assert_eq!(problem, "rotating-rod");
                assert_eq!(params.len(), 2);
                assert!(no_prompt);
            }
            _ => panic!("expected solve command"),
        }
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let problem = ProblemCatalog::global().lookup("wedge-bounce").unwrap();
        let assignments = [("alpha".to_string(), "30".to_string())];
        let err = cmd_solve(problem, &assignments, false, OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "Unknown parameter 'alpha' for wedge-bounce");
    }

    #[test]
    fn test_solve_errors_keep_their_message() {
        let err = CliError::from(SolveError::domain(
            "rotating-rod",
            "rod does not deflect at this speed",
        ));
        assert_eq!(
            err.to_string(),
            "Physically infeasible configuration (rotating-rod): rod does not deflect at this speed"
        );

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Domain\""));
    }
}
