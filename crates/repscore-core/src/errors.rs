use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to bring either input document into memory.
///
/// The loader propagates this; the evaluator call site decides what to do
/// with it. In practice every variant is recovered by substituting empty
/// documents, but the typed cause lets the caller log it once instead of
/// having it swallowed inside the loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file the failure was about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Rubric file missing, unparsable, or structurally invalid.
#[derive(Debug, Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);
