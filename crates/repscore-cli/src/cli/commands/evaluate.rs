use repscore_core::errors::ConfigError;
use repscore_core::report::summary::RunSummary;
use repscore_core::report::{console, json, summary};
use repscore_core::{load_rubric, Evaluator, Rubric};

use crate::cli::args::EvaluateArgs;
use crate::exit_codes;

pub fn run(args: EvaluateArgs) -> anyhow::Result<i32> {
    let rubric = match effective_rubric(&args) {
        Ok(rubric) => rubric,
        Err(e) => {
            eprintln!("{e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let mut evaluator = match args.seed {
        Some(seed) => Evaluator::with_seed(rubric, seed),
        None => Evaluator::new(rubric),
    };

    let evaluation = evaluator.evaluate_detailed(&args.annotations, &args.submission, &args.phase);

    if !args.quiet {
        console::print_report(&evaluation);
    }

    // Stdout carries the mapping unless it was redirected to a file.
    match &args.output {
        Some(out) => {
            json::write_output(&evaluation.output, out)?;
            tracing::info!(path = %out.display(), "wrote output mapping");
        }
        None => println!("{}", serde_json::to_string_pretty(&evaluation.output)?),
    }

    if let Some(out) = &args.summary {
        summary::write_summary(&RunSummary::from_evaluation(&evaluation), out)?;
        tracing::info!(path = %out.display(), "wrote run summary");
    }

    Ok(exit_codes::SUCCESS)
}

fn effective_rubric(args: &EvaluateArgs) -> Result<Rubric, ConfigError> {
    match &args.rubric {
        Some(path) => load_rubric(path),
        None => Ok(Rubric::default()),
    }
}
