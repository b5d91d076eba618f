//! The score draws themselves: per-category blends, the aggregate total,
//! and the held-out degradation.
//!
//! All randomness flows through the caller-supplied generator; there is no
//! global RNG, so a seeded run reproduces every draw.

use rand::Rng;

use crate::model::SplitScores;
use crate::rubric::{Category, CategoryRubric, TotalWeights};

/// Aspect draws are clamped to this band before blending.
pub const SCORE_FLOOR: f64 = 50.0;
pub const SCORE_CEILING: f64 = 100.0;

/// Round to 2 decimal places, the platform's display precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A drawn aspect value, kept for reporting.
#[derive(Debug, Clone)]
pub struct AspectScore {
    pub name: String,
    pub value: f64,
}

/// One category's final value plus the aspect draws behind it.
#[derive(Debug, Clone)]
pub struct CategoryScore {
    pub category: Category,
    pub value: f64,
    pub aspects: Vec<AspectScore>,
}

/// Draw one category score.
///
/// An integer base is drawn from the rubric's inclusive range, each aspect
/// gets an independent integer jitter in `[-j, +j]` and is clamped to the
/// score band, and the weighted blend is rounded to 2 decimals. With convex
/// weights the result stays inside the band.
pub fn score_category<R: Rng>(
    category: Category,
    rubric: &CategoryRubric,
    rng: &mut R,
) -> CategoryScore {
    let base = rng.gen_range(rubric.base_min..=rubric.base_max) as f64;
    let mut aspects = Vec::with_capacity(rubric.aspects.len());
    let mut blended = 0.0;
    for aspect in &rubric.aspects {
        let jitter = rng.gen_range(-rubric.jitter..=rubric.jitter) as f64;
        let drawn = (base + jitter).clamp(SCORE_FLOOR, SCORE_CEILING);
        blended += aspect.weight * drawn;
        aspects.push(AspectScore {
            name: aspect.name.clone(),
            value: drawn,
        });
    }
    CategoryScore {
        category,
        value: round2(blended),
        aspects,
    }
}

/// Blend already-rounded category values into `Total`.
pub fn aggregate_total(weights: &TotalWeights, d: f64, r: f64, i: f64, u: f64) -> f64 {
    round2(
        weights.disentanglement * d
            + weights.robustness * r
            + weights.interpretability * i
            + weights.practical_utility * u,
    )
}

/// The single multiplicative penalty shared by all four categories when
/// deriving the held-out split, uniform in `[0.9, 1.0)`.
pub fn generalization_factor<R: Rng>(rng: &mut R) -> f64 {
    0.9 + rng.gen::<f64>() * 0.1
}

/// Derive the test split: multiply each train category value by the shared
/// factor, round each to 2 decimals, then recompute `Total` from the
/// rounded degraded values.
pub fn degrade(train: &SplitScores, factor: f64, weights: &TotalWeights) -> SplitScores {
    let disentanglement = round2(train.disentanglement * factor);
    let robustness = round2(train.robustness * factor);
    let interpretability = round2(train.interpretability * factor);
    let practical_utility = round2(train.practical_utility * factor);
    let total = aggregate_total(
        weights,
        disentanglement,
        robustness,
        interpretability,
        practical_utility,
    );
    SplitScores {
        disentanglement,
        robustness,
        interpretability,
        practical_utility,
        total,
    }
}
