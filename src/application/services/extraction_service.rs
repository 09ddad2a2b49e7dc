use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{ExtractorError, TextExtractor, VisionClient};
use crate::domain::{ContentCategory, ExtractionOutcome, FileRecord};

/// Runs the per-file extraction state machine:
/// classify, attempt the category's primary strategy, and fall back to
/// optical recognition when the primary yields nothing usable.
///
/// Files are independent; one file's failure never aborts its siblings.
pub struct ExtractionService<V>
where
    V: VisionClient,
{
    extractors: HashMap<ContentCategory, Arc<dyn TextExtractor>>,
    vision: Arc<V>,
}

impl<V> ExtractionService<V>
where
    V: VisionClient,
{
    pub fn new(
        extractors: Vec<(ContentCategory, Arc<dyn TextExtractor>)>,
        vision: Arc<V>,
    ) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
            vision,
        }
    }

    /// Extracts every file concurrently and joins the outcomes in input
    /// order. The returned list always has the same cardinality as the
    /// input.
    pub async fn extract_all(&self, records: Vec<FileRecord>) -> Vec<ExtractionOutcome> {
        let tasks = records.iter().map(|record| self.extract_file(record));
        futures::future::join_all(tasks).await
    }

    #[tracing::instrument(
        skip(self, record),
        fields(file_id = %record.id.as_uuid(), filename = %record.filename)
    )]
    pub async fn extract_file(&self, record: &FileRecord) -> ExtractionOutcome {
        let category = ContentCategory::classify(&record.filename, &record.declared_mime);
        tracing::debug!(?category, bytes = record.content.len(), "File classified");

        let primary = match self.extractors.get(&category) {
            Some(extractor) => extractor.extract(record).await,
            None => Err(ExtractorError::UnsupportedFormat(record.filename.clone())),
        };

        match primary {
            Ok(text) if !text.trim().is_empty() => {
                ExtractionOutcome::success(&record.filename, text)
            }
            primary => {
                if let Err(error) = &primary {
                    tracing::warn!(error = %error, "Primary extraction failed, considering fallback");
                }
                self.attempt_fallback(record, category, primary).await
            }
        }
    }

    /// Second tier of the pipeline: one optical-recognition call on the
    /// raw bytes, unless the format is conclusively unsupported or the
    /// primary strategy already was the optical one.
    async fn attempt_fallback(
        &self,
        record: &FileRecord,
        category: ContentCategory,
        primary: Result<String, ExtractorError>,
    ) -> ExtractionOutcome {
        if ContentCategory::is_known_unsupported(&record.filename) {
            return ExtractionOutcome::failure(
                &record.filename,
                format!("unsupported file format: {}", record.filename),
            );
        }

        // The image strategy already is optical recognition; a second
        // call would just repeat the same request.
        if category == ContentCategory::Image {
            let reason = match primary {
                Err(error) => error.to_string(),
                Ok(_) => "no extractable text found".to_string(),
            };
            return ExtractionOutcome::failure(&record.filename, reason);
        }

        match self
            .vision
            .recognize_text(&record.content, &record.declared_mime)
            .await
        {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!(chars = text.len(), "Optical fallback recovered text");
                ExtractionOutcome::success(&record.filename, text.trim().to_string())
            }
            Ok(_) => ExtractionOutcome::failure(&record.filename, "no extractable text found"),
            Err(error) => {
                tracing::warn!(error = %error, "Optical fallback failed");
                ExtractionOutcome::failure(&record.filename, error.to_string())
            }
        }
    }
}
