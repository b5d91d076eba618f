use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repscore",
    version,
    about = "Challenge-phase scoring for representation-learning submissions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a submission the way the hosting platform would
    Evaluate(EvaluateArgs),
    /// Validate and print the effective scoring rubric
    Rubric(RubricArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Reference annotation file (JSON)
    #[arg(long)]
    pub annotations: PathBuf,

    /// Participant submission file (JSON)
    #[arg(long)]
    pub submission: PathBuf,

    /// Phase codename the platform passes ("dev" or "test")
    #[arg(long)]
    pub phase: String,

    /// Seed the score draws for a reproducible run
    #[arg(long, env = "REPSCORE_SEED")]
    pub seed: Option<u64>,

    /// Rubric override (YAML); defaults to the built-in rubric
    #[arg(long)]
    pub rubric: Option<PathBuf>,

    /// Write the platform mapping here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write a machine-readable run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Suppress the console score table
    #[arg(long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RubricArgs {
    /// Rubric file to validate; defaults to the built-in rubric
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}
