use std::path::Path;

use crate::model::EvaluationOutput;

/// Write the platform mapping exactly as the harness returns it.
pub fn write_output(output: &EvaluationOutput, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SplitScores;

    #[test]
    fn written_file_parses_back_to_the_same_mapping() {
        let scores = SplitScores {
            disentanglement: 80.0,
            robustness: 75.0,
            interpretability: 70.0,
            practical_utility: 85.0,
            total: 78.25,
        };
        let output = EvaluationOutput::dev(scores);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_output(&output, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let back: EvaluationOutput = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, output);
    }
}
