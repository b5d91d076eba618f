//! Scoring rubric: per-category draw ranges, aspect weights, and the
//! aggregate weights.
//!
//! The built-in rubric reproduces the official challenge weighting. A YAML
//! override exists so hosts can rebalance between competition editions
//! without a rebuild; `validate` keeps overrides inside the assumptions the
//! scoring stage makes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Tolerance when checking that a weight set sums to 1.0.
const WEIGHT_EPSILON: f64 = 1e-6;

/// The four scored dimensions, in aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Disentanglement,
    Robustness,
    Interpretability,
    PracticalUtility,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Disentanglement,
        Category::Robustness,
        Category::Interpretability,
        Category::PracticalUtility,
    ];

    /// Leaderboard display name (also the output mapping key).
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Disentanglement => "Disentanglement",
            Category::Robustness => "Robustness",
            Category::Interpretability => "Interpretability",
            Category::PracticalUtility => "Practical Utility",
        }
    }
}

/// One synthetic sub-aspect of a category and its blend weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectRubric {
    pub name: String,
    pub weight: f64,
}

/// How a single category score is drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRubric {
    /// Inclusive lower bound of the integer base draw.
    pub base_min: i64,
    /// Inclusive upper bound of the integer base draw.
    pub base_max: i64,
    /// Aspects are drawn as base plus an integer in `[-jitter, +jitter]`.
    pub jitter: i64,
    pub aspects: Vec<AspectRubric>,
}

/// Convex weights blending the four category values into `Total`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TotalWeights {
    pub disentanglement: f64,
    pub robustness: f64,
    pub interpretability: f64,
    pub practical_utility: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rubric {
    pub disentanglement: CategoryRubric,
    pub robustness: CategoryRubric,
    pub interpretability: CategoryRubric,
    pub practical_utility: CategoryRubric,
    pub totals: TotalWeights,
}

fn aspect(name: &str, weight: f64) -> AspectRubric {
    AspectRubric {
        name: name.to_string(),
        weight,
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            disentanglement: CategoryRubric {
                base_min: 70,
                base_max: 95,
                jitter: 5,
                aspects: vec![aspect("mig", 0.4), aspect("dci", 0.4), aspect("sap", 0.2)],
            },
            robustness: CategoryRubric {
                base_min: 65,
                base_max: 95,
                jitter: 8,
                aspects: vec![
                    aspect("domain_shift", 0.4),
                    aspect("noise", 0.3),
                    aspect("occlusion", 0.3),
                ],
            },
            interpretability: CategoryRubric {
                base_min: 60,
                base_max: 95,
                jitter: 10,
                aspects: vec![
                    aspect("visualization_quality", 0.3),
                    aspect("semantic_alignment", 0.4),
                    aspect("human_understanding", 0.3),
                ],
            },
            practical_utility: CategoryRubric {
                base_min: 65,
                base_max: 95,
                jitter: 7,
                aspects: vec![
                    aspect("classification", 0.3),
                    aspect("generation", 0.3),
                    aspect("manipulation", 0.2),
                    aspect("efficiency", 0.2),
                ],
            },
            totals: TotalWeights {
                disentanglement: 0.25,
                robustness: 0.25,
                interpretability: 0.20,
                practical_utility: 0.30,
            },
        }
    }
}

impl Rubric {
    pub fn category(&self, category: Category) -> &CategoryRubric {
        match category {
            Category::Disentanglement => &self.disentanglement,
            Category::Robustness => &self.robustness,
            Category::Interpretability => &self.interpretability,
            Category::PracticalUtility => &self.practical_utility,
        }
    }

    /// Reject rubrics the scoring stage cannot honor: empty aspect lists,
    /// inverted base ranges, negative jitter, or non-convex weight sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let rubric = self.category(category);
            let name = category.display_name();
            if rubric.aspects.is_empty() {
                return Err(ConfigError(format!("{name}: rubric has no aspects")));
            }
            if rubric.base_min > rubric.base_max {
                return Err(ConfigError(format!(
                    "{name}: base range {}..={} is inverted",
                    rubric.base_min, rubric.base_max
                )));
            }
            if rubric.jitter < 0 {
                return Err(ConfigError(format!(
                    "{name}: jitter {} is negative",
                    rubric.jitter
                )));
            }
            let sum: f64 = rubric.aspects.iter().map(|a| a.weight).sum();
            if (sum - 1.0).abs() > WEIGHT_EPSILON {
                return Err(ConfigError(format!(
                    "{name}: aspect weights sum to {sum}, expected 1.0"
                )));
            }
        }

        let totals = self.totals;
        let sum = totals.disentanglement
            + totals.robustness
            + totals.interpretability
            + totals.practical_utility;
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(ConfigError(format!(
                "total weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

/// Load and validate a rubric override from a YAML file.
pub fn load_rubric(path: &Path) -> Result<Rubric, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read rubric {}: {}", path.display(), e)))?;
    let rubric: Rubric = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse rubric YAML: {}", e)))?;
    rubric.validate()?;
    Ok(rubric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_rubric_is_valid() {
        Rubric::default().validate().unwrap();
    }

    #[test]
    fn default_rubric_carries_official_weights() {
        let rubric = Rubric::default();
        assert_eq!(rubric.totals.disentanglement, 0.25);
        assert_eq!(rubric.totals.robustness, 0.25);
        assert_eq!(rubric.totals.interpretability, 0.20);
        assert_eq!(rubric.totals.practical_utility, 0.30);
        assert_eq!(rubric.disentanglement.base_min, 70);
        assert_eq!(rubric.disentanglement.base_max, 95);
        assert_eq!(rubric.practical_utility.aspects.len(), 4);
    }

    #[test]
    fn unbalanced_aspect_weights_are_rejected() {
        let mut rubric = Rubric::default();
        rubric.robustness.aspects[0].weight = 0.9;
        let err = rubric.validate().unwrap_err();
        assert!(err.to_string().contains("Robustness"));
    }

    #[test]
    fn inverted_base_range_is_rejected() {
        let mut rubric = Rubric::default();
        rubric.interpretability.base_min = 96;
        assert!(rubric.validate().is_err());
    }

    #[test]
    fn rubric_roundtrips_through_yaml() {
        let yaml = serde_yaml::to_string(&Rubric::default()).unwrap();
        let back: Rubric = serde_yaml::from_str(&yaml).unwrap();
        back.validate().unwrap();
    }

    #[test]
    fn load_rubric_reports_missing_file() {
        let err = load_rubric(Path::new("/nonexistent/rubric.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_rubric_reports_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "totals: [this, is, not, a, rubric]").unwrap();
        let err = load_rubric(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
