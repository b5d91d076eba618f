//! Phase-aware scoring for representation-learning challenge submissions.
//!
//! The hosting platform hands over two JSON files (reference annotations and
//! a participant submission) plus a phase codename, and expects the
//! leaderboard mapping back. Scores are synthetic draws shaped by a rubric;
//! the challenge template this harness implements performs no real metric
//! computation, so the submission contents are never inspected.

pub mod errors;
pub mod evaluator;
pub mod inputs;
pub mod model;
pub mod report;
pub mod rubric;
pub mod scoring;

pub use evaluator::{Evaluation, Evaluator, Phase, RunProvenance};
pub use model::{EvaluationOutput, SplitRecord, SplitScores};
pub use rubric::{load_rubric, Rubric};
