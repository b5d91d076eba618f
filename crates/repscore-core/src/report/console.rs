//! Human summary on stderr. Stdout is reserved for the output mapping.

use crate::evaluator::Evaluation;
use crate::model::SplitScores;

/// One aligned score line. Deterministic, unit-testable.
#[must_use]
pub fn format_score_line(name: &str, value: f64) -> String {
    format!("  {:<20} {:>6.2}", name, value)
}

fn print_split(name: &str, scores: &SplitScores) {
    eprintln!("{name}");
    eprintln!("{}", format_score_line("Disentanglement", scores.disentanglement));
    eprintln!("{}", format_score_line("Robustness", scores.robustness));
    eprintln!("{}", format_score_line("Interpretability", scores.interpretability));
    eprintln!("{}", format_score_line("Practical Utility", scores.practical_utility));
    eprintln!("{}", format_score_line("Total", scores.total));
}

/// Print the per-split score table, the train-split aspect draws, and the
/// run footer.
pub fn print_report(evaluation: &Evaluation) {
    eprintln!();
    match &evaluation.output.result {
        Some(records) => {
            for record in records {
                print_split(record.split_name(), record.scores());
            }
        }
        None => eprintln!("(no scored splits)"),
    }

    if !evaluation.breakdown.is_empty() {
        eprintln!();
        eprintln!("aspect draws (train split)");
        for category in &evaluation.breakdown {
            let aspects = category
                .aspects
                .iter()
                .map(|a| format!("{}={:.1}", a.name, a.value))
                .collect::<Vec<_>>()
                .join(" ");
            eprintln!("  {:<20} {}", category.category.display_name(), aspects);
        }
    }

    print_run_footer(evaluation);
}

/// Seed, factor, and fallback state, for CI log visibility.
pub fn print_run_footer(evaluation: &Evaluation) {
    let prov = &evaluation.provenance;
    let seed = prov
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".into());
    let factor = prov
        .generalization_factor
        .map(|f| format!("{:.4}", f))
        .unwrap_or_else(|| "—".into());
    let fallback = if prov.input_fallback {
        "  (inputs missing; scored with empty documents)"
    } else {
        ""
    };
    eprintln!();
    eprintln!(
        "Phase: {}  Seed: {}  Generalization factor: {}{}",
        prov.phase_codename, seed, factor, fallback
    );
}
