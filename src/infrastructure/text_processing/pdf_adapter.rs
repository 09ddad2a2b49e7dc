use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractorError, TextExtractor};
use crate::domain::{ContentCategory, FileRecord};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Primary strategy for PDF uploads: parses the document object and
/// concatenates per-page text runs in document order. Scanned PDFs with
/// no machine-readable text come back as `NoTextFound` so the
/// orchestrator can route them to optical recognition.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<String>, ExtractorError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            ExtractorError::MalformedDocument(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractorError::MalformedDocument(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).unwrap_or_default();
            if !text.trim().is_empty() {
                pages.push(text);
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, record),
        fields(file_id = %record.id.as_uuid(), filename = %record.filename)
    )]
    async fn extract(&self, record: &FileRecord) -> Result<String, ExtractorError> {
        let category = ContentCategory::classify(&record.filename, &record.declared_mime);
        if category != ContentCategory::Pdf {
            return Err(ExtractorError::UnsupportedFormat(record.filename.clone()));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            ExtractorError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(&record.content).map_err(|e| {
            ExtractorError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let filename = record.filename.clone();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| ExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let sanitized_pages: Vec<String> = pages
            .into_iter()
            .map(|p| sanitize_extracted_text(&p))
            .filter(|t| !t.is_empty())
            .collect();

        if sanitized_pages.is_empty() {
            return Err(ExtractorError::NoTextFound(filename));
        }

        Ok(sanitized_pages.join("\n\n"))
    }
}
