//! summary.json for local runs.
//!
//! The hosting platform only consumes the output mapping; this file exists
//! so CI and local debugging can see how a run was produced (seed, fallback
//! state, degradation factor) without scraping logs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::evaluator::Evaluation;
use crate::model::EvaluationOutput;

/// Serde helpers: seed as JSON string or null. A u64 seed can exceed 2^53,
/// which JSON numbers cannot carry without precision loss downstream.
mod serde_seed {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(v: &Option<u64>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match v {
            Some(n) => s.serialize_str(&n.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<serde_json::Value> = Option::deserialize(d)?;
        match opt {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => {
                let n = s.parse::<u64>().map_err(serde::de::Error::custom)?;
                Ok(Some(n))
            }
            Some(serde_json::Value::Number(num)) => {
                // Accepted on read for hand-written files; the write path
                // always emits a string.
                let n = num
                    .as_u64()
                    .ok_or_else(|| serde::de::Error::custom("seed must be a u64"))?;
                Ok(Some(n))
            }
            Some(other) => Err(serde::de::Error::custom(format!(
                "seed must be string or null, got: {other}"
            ))),
        }
    }
}

/// Current schema version for summary.json.
pub const SCHEMA_VERSION: u32 = 1;

/// Machine-readable record of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Schema version for compatibility detection.
    pub schema_version: u32,

    /// Version of this tool that produced the run.
    pub tool_version: String,

    /// Phase codename exactly as requested, recognized or not.
    pub phase: String,

    /// Seed of the run, as decimal string or null. Null means the run was
    /// seeded from entropy and cannot be replayed.
    #[serde(with = "serde_seed")]
    pub seed: Option<u64>,

    /// True when empty documents were substituted for unloadable inputs.
    pub input_fallback: bool,

    /// Shared degradation factor; test phase only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generalization_factor: Option<f64>,

    /// The platform mapping, embedded verbatim.
    pub output: EvaluationOutput,
}

impl RunSummary {
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            phase: evaluation.provenance.phase_codename.clone(),
            seed: evaluation.provenance.seed,
            input_fallback: evaluation.provenance.input_fallback,
            generalization_factor: evaluation.provenance.generalization_factor,
            output: evaluation.output.clone(),
        }
    }
}

/// Write summary.json to a path.
pub fn write_summary(summary: &RunSummary, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
