use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor, VisionClient};
use crate::domain::{ContentCategory, FileRecord};

/// Primary strategy for image uploads: hands the bytes to the vision
/// service as-is. For images there is no second tier; this already is
/// the optical-recognition path.
pub struct ImageOcrAdapter {
    vision: Arc<dyn VisionClient>,
}

impl ImageOcrAdapter {
    pub fn new(vision: Arc<dyn VisionClient>) -> Self {
        Self { vision }
    }
}

#[async_trait]
impl TextExtractor for ImageOcrAdapter {
    #[tracing::instrument(
        skip(self, record),
        fields(file_id = %record.id.as_uuid(), filename = %record.filename)
    )]
    async fn extract(&self, record: &FileRecord) -> Result<String, ExtractorError> {
        let category = ContentCategory::classify(&record.filename, &record.declared_mime);
        if category != ContentCategory::Image {
            return Err(ExtractorError::UnsupportedFormat(record.filename.clone()));
        }

        let text = self
            .vision
            .recognize_text(&record.content, &record.declared_mime)
            .await
            .map_err(|e| ExtractorError::ServiceUnavailable(e.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractorError::NoTextFound(record.filename.clone()));
        }

        Ok(text.to_string())
    }
}
