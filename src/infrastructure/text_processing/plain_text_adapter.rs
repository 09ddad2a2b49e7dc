use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};
use crate::domain::{ContentCategory, FileRecord};

/// Passthrough strategy for plain-text uploads: UTF-8 decode, no
/// transformation. Whitespace normalization happens later, at the
/// aggregation stage.
pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract(&self, record: &FileRecord) -> Result<String, ExtractorError> {
        let category = ContentCategory::classify(&record.filename, &record.declared_mime);
        if category != ContentCategory::PlainText {
            return Err(ExtractorError::UnsupportedFormat(record.filename.clone()));
        }

        String::from_utf8(record.content.clone())
            .map_err(|e| ExtractorError::ExtractionFailed(e.to_string()))
    }
}
