use async_trait::async_trait;

use crate::domain::FileRecord;

/// One extraction strategy: converts a file's bytes into plain text for
/// a single content category.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, record: &FileRecord) -> Result<String, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no extractable text found in {0}")]
    NoTextFound(String),
    #[error("recognition service unavailable: {0}")]
    ServiceUnavailable(String),
}
