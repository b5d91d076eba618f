//! The mapping returned to the hosting platform.
//!
//! Key names here are a wire contract imposed by the platform's result
//! ingest: renaming any of them silently breaks the leaderboard. Yes,
//! `Practical Utility` contains a space.

use serde::{Deserialize, Serialize};

/// Per-split category scores plus their aggregate, as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitScores {
    #[serde(rename = "Disentanglement")]
    pub disentanglement: f64,
    #[serde(rename = "Robustness")]
    pub robustness: f64,
    #[serde(rename = "Interpretability")]
    pub interpretability: f64,
    #[serde(rename = "Practical Utility")]
    pub practical_utility: f64,
    /// Fixed convex blend of the four category values, rounded to 2 decimals.
    #[serde(rename = "Total")]
    pub total: f64,
}

/// One entry of the `result` list, keyed by split name.
///
/// External tagging gives exactly the platform shape:
/// `{"train_split": {...}}` / `{"test_split": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitRecord {
    #[serde(rename = "train_split")]
    Train(SplitScores),
    #[serde(rename = "test_split")]
    Test(SplitScores),
}

impl SplitRecord {
    pub fn split_name(&self) -> &'static str {
        match self {
            SplitRecord::Train(_) => "train_split",
            SplitRecord::Test(_) => "test_split",
        }
    }

    pub fn scores(&self) -> &SplitScores {
        match self {
            SplitRecord::Train(scores) | SplitRecord::Test(scores) => scores,
        }
    }
}

/// The top-level mapping handed back to the platform.
///
/// Both keys are omitted entirely (not serialized as null) when no phase
/// branch matched, so an unrecognized codename serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<SplitRecord>>,
    /// Copy of the last `result` entry's inner mapping, used by the platform
    /// to render the submission's result file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_result: Option<SplitScores>,
}

impl EvaluationOutput {
    /// Development phase: one train-split record, mirrored into
    /// `submission_result`.
    pub fn dev(train: SplitScores) -> Self {
        Self {
            result: Some(vec![SplitRecord::Train(train.clone())]),
            submission_result: Some(train),
        }
    }

    /// Test phase: train record first, degraded test record second;
    /// `submission_result` mirrors the test record.
    pub fn test(train: SplitScores, test: SplitScores) -> Self {
        Self {
            result: Some(vec![
                SplitRecord::Train(train),
                SplitRecord::Test(test.clone()),
            ]),
            submission_result: Some(test),
        }
    }
}
