use serde::{Deserialize, Serialize};

/// Per-file result of the extraction pipeline. Every uploaded
/// `FileRecord` yields exactly one outcome; a failure on one file never
/// blocks outcomes for its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExtractionOutcome {
    Success { file: String, text: String },
    Failure { file: String, reason: String },
}

impl ExtractionOutcome {
    pub fn success(file: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Success {
            file: file.into(),
            text: text.into(),
        }
    }

    pub fn failure(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failure {
            file: file.into(),
            reason: reason.into(),
        }
    }

    pub fn file(&self) -> &str {
        match self {
            Self::Success { file, .. } | Self::Failure { file, .. } => file,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
