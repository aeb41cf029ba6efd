//! Worksheet runner for the fixed set of circuit-analysis problems.
//!
//! # Usage
//!
//! ```bash
//! circuit-lab FCDGA            # one group letter per task
//! circuit-lab C -t 3           # third task only, group C
//! circuit-lab -p sample -d     # named preset, verbose intermediates
//! ```

use std::process;

use clap::Parser;

use circuit_lab::errors::CircuitLabError;
use circuit_lab::select::{preset, SelectionError, TaskCode, TaskRange};
use circuit_lab::worksheet::evaluate;

/// Solves the five fixed circuit-analysis problems for chosen parameter groups.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Five group letters A-H (underscore for every group), or a single
    /// letter applied to all five tasks
    #[arg(
        value_name = "CODE",
        required_unless_present = "preset",
        conflicts_with = "preset"
    )]
    code: Option<String>,

    /// Run a named preset code instead of CODE
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Restrict execution to a 1-based task index or inclusive range
    #[arg(short, long, value_name = "{n|n-m}")]
    task_range: Option<String>,

    /// Print intermediate quantities below every reading
    #[arg(short, long)]
    dump: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CircuitLabError> {
    let code: TaskCode = if let Some(name) = &args.preset {
        preset(name)?
    } else if let Some(raw) = &args.code {
        raw.parse().map_err(CircuitLabError::Selection)?
    } else {
        // clap requires CODE unless --preset is given.
        return Err(SelectionError::InvalidCodeLength { found: 0 }.into());
    };

    let range: TaskRange = match &args.task_range {
        Some(raw) => raw.parse().map_err(CircuitLabError::Selection)?,
        None => TaskRange::full(),
    };

    for task in range.tasks() {
        let index = task.index();
        for group in code.selector(index).groups() {
            let report = evaluate(task, group)?;
            println!("({index})[{group}] {}", report.reading);
            if args.dump {
                for line in &report.trace {
                    println!("\t{line}");
                }
            }
        }
    }
    Ok(())
}
