//! Loading of the two platform-supplied JSON documents.
//!
//! Contents are deliberately opaque. The scoring stage never inspects them,
//! so no schema is imposed here; any well-formed JSON document is accepted.

use std::path::Path;

use serde_json::Value;

use crate::errors::LoadError;

/// The reference annotations and the participant submission.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub annotations: Value,
    pub submission: Value,
}

impl Default for Inputs {
    /// Two empty documents, the substitute used when loading fails.
    fn default() -> Self {
        Self {
            annotations: Value::Object(Default::default()),
            submission: Value::Object(Default::default()),
        }
    }
}

fn load_document(path: &Path) -> Result<Value, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both documents, failing on the first unreadable or malformed one.
pub fn load_inputs(annotation_file: &Path, submission_file: &Path) -> Result<Inputs, LoadError> {
    Ok(Inputs {
        annotations: load_document(annotation_file)?,
        submission: load_document(submission_file)?,
    })
}
