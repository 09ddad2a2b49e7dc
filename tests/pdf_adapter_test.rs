use flashdeck::application::ports::{ExtractorError, TextExtractor};
use flashdeck::domain::FileRecord;
use flashdeck::infrastructure::text_processing::PdfAdapter;

fn pdf_record(filename: &str, content: Vec<u8>) -> FileRecord {
    FileRecord::new(filename.to_string(), "application/pdf".to_string(), content)
}

#[tokio::test]
async fn given_pdf_with_embedded_text_when_extracting_then_returns_text() {
    let adapter = PdfAdapter::new();
    let record = pdf_record("sample.pdf", include_bytes!("fixtures/sample.pdf").to_vec());

    let text = adapter.extract(&record).await.unwrap();

    assert!(text.contains("Photosynthesis"));
    assert!(text.contains("Chlorophyll"));
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_then_returns_malformed_document() {
    let adapter = PdfAdapter::new();
    let record = pdf_record("corrupt.pdf", b"not a pdf at all".to_vec());

    let result = adapter.extract(&record).await;

    assert!(matches!(result, Err(ExtractorError::MalformedDocument(_))));
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_no_text_found() {
    let adapter = PdfAdapter::new();
    let record = pdf_record("empty.pdf", include_bytes!("fixtures/empty.pdf").to_vec());

    let result = adapter.extract(&record).await;

    assert!(matches!(result, Err(ExtractorError::NoTextFound(_))));
}

#[tokio::test]
async fn given_non_pdf_upload_when_extracting_then_returns_unsupported_format() {
    let adapter = PdfAdapter::new();
    let record = FileRecord::new(
        "notes.txt".to_string(),
        "text/plain".to_string(),
        b"plain text".to_vec(),
    );

    let result = adapter.extract(&record).await;

    assert!(matches!(result, Err(ExtractorError::UnsupportedFormat(_))));
}
