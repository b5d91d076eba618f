//! The evaluator: phase dispatch, input fallback, and the draws.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::inputs::{load_inputs, Inputs};
use crate::model::{EvaluationOutput, SplitScores};
use crate::rubric::{Category, Rubric};
use crate::scoring::{self, CategoryScore};

/// Competition stage a submission is scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Validation-facing phase; scores a single train split.
    Dev,
    /// Held-out final phase; adds a degraded test split.
    Test,
}

impl Phase {
    /// Codenames are fixed by the platform's challenge configuration.
    pub fn from_codename(codename: &str) -> Option<Self> {
        match codename {
            "dev" => Some(Phase::Dev),
            "test" => Some(Phase::Test),
            _ => None,
        }
    }

    pub fn codename(self) -> &'static str {
        match self {
            Phase::Dev => "dev",
            Phase::Test => "test",
        }
    }
}

/// How a run was produced. Local reporting only, never part of the
/// platform mapping.
#[derive(Debug, Clone)]
pub struct RunProvenance {
    /// Phase codename exactly as requested, recognized or not.
    pub phase_codename: String,
    pub phase: Option<Phase>,
    pub seed: Option<u64>,
    /// True when the inputs could not be loaded and empty documents were
    /// substituted.
    pub input_fallback: bool,
    /// Shared degradation factor, present for the test phase only.
    pub generalization_factor: Option<f64>,
}

/// A finished run: the platform mapping plus everything worth reporting
/// about how it came to be.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub output: EvaluationOutput,
    pub provenance: RunProvenance,
    /// Aspect-level draws behind the train split, in category order. Empty
    /// when no phase branch matched.
    pub breakdown: Vec<CategoryScore>,
}

/// Phase-aware scoring engine.
///
/// One instance per submission. Instances share nothing, so evaluating
/// independent submissions concurrently is safe.
pub struct Evaluator {
    rubric: Rubric,
    rng: StdRng,
    seed: Option<u64>,
}

impl Evaluator {
    pub fn new(rubric: Rubric) -> Self {
        Self {
            rubric,
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Deterministic evaluator: the same seed reproduces the full run.
    pub fn with_seed(rubric: Rubric, seed: u64) -> Self {
        Self {
            rubric,
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// The entry point the hosting platform calls: two file paths and a
    /// phase codename in, the leaderboard mapping out.
    pub fn evaluate(
        &mut self,
        annotation_file: &Path,
        submission_file: &Path,
        phase_codename: &str,
    ) -> EvaluationOutput {
        self.evaluate_detailed(annotation_file, submission_file, phase_codename)
            .output
    }

    /// Like [`Evaluator::evaluate`], but keeps provenance and the aspect
    /// breakdown for reporting.
    pub fn evaluate_detailed(
        &mut self,
        annotation_file: &Path,
        submission_file: &Path,
        phase_codename: &str,
    ) -> Evaluation {
        tracing::info!(phase = phase_codename, "starting evaluation");

        // Never fail the pipeline: an unloadable input is logged here, with
        // its typed cause, and scoring proceeds on empty documents.
        let (inputs, input_fallback) = match load_inputs(annotation_file, submission_file) {
            Ok(inputs) => {
                tracing::info!(phase = phase_codename, "loaded annotations and submission");
                (inputs, false)
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load inputs; scoring with empty documents");
                (Inputs::default(), true)
            }
        };

        let mut provenance = RunProvenance {
            phase_codename: phase_codename.to_string(),
            phase: Phase::from_codename(phase_codename),
            seed: self.seed,
            input_fallback,
            generalization_factor: None,
        };

        let (output, breakdown) = match provenance.phase {
            Some(Phase::Dev) => {
                tracing::info!("scoring development phase");
                let (train, breakdown) = self.score_split(&inputs);
                tracing::info!(total = train.total, "development phase scored");
                (EvaluationOutput::dev(train), breakdown)
            }
            Some(Phase::Test) => {
                tracing::info!("scoring test phase");
                let (train, breakdown) = self.score_split(&inputs);
                let factor = scoring::generalization_factor(&mut self.rng);
                let test = scoring::degrade(&train, factor, &self.rubric.totals);
                provenance.generalization_factor = Some(factor);
                tracing::info!(
                    train_total = train.total,
                    test_total = test.total,
                    "test phase scored"
                );
                (EvaluationOutput::test(train, test), breakdown)
            }
            None => {
                tracing::warn!(
                    phase = phase_codename,
                    "unrecognized phase codename; emitting empty output"
                );
                (EvaluationOutput::default(), Vec::new())
            }
        };

        Evaluation {
            output,
            provenance,
            breakdown,
        }
    }

    /// Draw the four category scores for one split.
    ///
    /// The documents are taken for signature parity with a real scorer;
    /// placeholder scoring never reads them.
    fn score_split(&mut self, _inputs: &Inputs) -> (SplitScores, Vec<CategoryScore>) {
        let mut breakdown = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            breakdown.push(scoring::score_category(
                category,
                self.rubric.category(category),
                &mut self.rng,
            ));
        }
        let disentanglement = breakdown[0].value;
        let robustness = breakdown[1].value;
        let interpretability = breakdown[2].value;
        let practical_utility = breakdown[3].value;
        let total = scoring::aggregate_total(
            &self.rubric.totals,
            disentanglement,
            robustness,
            interpretability,
            practical_utility,
        );
        (
            SplitScores {
                disentanglement,
                robustness,
                interpretability,
                practical_utility,
                total,
            },
            breakdown,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_codenames_roundtrip() {
        assert_eq!(Phase::from_codename("dev"), Some(Phase::Dev));
        assert_eq!(Phase::from_codename("test"), Some(Phase::Test));
        assert_eq!(Phase::Dev.codename(), "dev");
        assert_eq!(Phase::Test.codename(), "test");
    }

    #[test]
    fn unknown_codenames_are_not_phases() {
        for codename in ["staging", "DEV", "Test", ""] {
            assert_eq!(Phase::from_codename(codename), None, "{codename:?}");
        }
    }
}
