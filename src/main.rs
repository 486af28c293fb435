//! Ohmlaw - Series/Parallel Circuit Calculator
//!
//! Solves partially-specified DC circuits from a sheet file.
//!
//! # Usage
//!
//! ```bash
//! ohmlaw circuit.ohm
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ohmlaw_core::{
    circuit::{validate_components, validate_totals, Mode},
    dsl,
    error::{OhmlawError, Result},
    output,
    solver::{aggregate_parallel, aggregate_series, solve},
};

/// Series/parallel circuit calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit sheet file (.ohm)
    #[arg(value_name = "SHEET_FILE")]
    sheet_file: PathBuf,
}

fn main() -> ExitCode {
    match run(&Args::parse()) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    // Parse the sheet file
    let sheet = dsl::parse_file(&args.sheet_file)?;
    let mode = sheet.mode.ok_or(OhmlawError::MissingMode)?;

    // Build and validate the component list
    let components = sheet.to_components();
    validate_components(&components)?;

    let conflicts = validate_totals(&components, &sheet.totals, mode);
    if !conflicts.is_empty() {
        return Err(OhmlawError::conflicts(
            conflicts.iter().map(|c| c.to_string()).collect(),
        ));
    }

    // Solve
    let solved = solve(&components, &sheet.totals, mode);

    let aggregates = match mode {
        Mode::Basic => None,
        Mode::Series => Some(aggregate_series(&solved)),
        Mode::Parallel => Some(aggregate_parallel(&solved)),
    };

    let names: Vec<String> = sheet.components.iter().map(|c| c.name.clone()).collect();
    Ok(output::render_report(&names, &solved, aggregates.as_ref()))
}
