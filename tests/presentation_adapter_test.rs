use std::io::{Cursor, Write};
use std::sync::Arc;

use zip::write::SimpleFileOptions;

use flashdeck::application::ports::{ExtractorError, TextExtractor, VisionClient};
use flashdeck::domain::FileRecord;
use flashdeck::infrastructure::llm::MockVisionClient;
use flashdeck::infrastructure::text_processing::PresentationAdapter;

const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

fn build_pptx(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn slide_xml(runs: &[&str]) -> String {
    let body: String = runs
        .iter()
        .map(|run| format!("<a:r><a:t>{run}</a:t></a:r>"))
        .collect();
    format!("<p:sld><p:cSld><p:spTree>{body}</p:spTree></p:cSld></p:sld>")
}

fn record(content: Vec<u8>) -> FileRecord {
    FileRecord::new("deck.pptx".to_string(), PPTX_MIME.to_string(), content)
}

#[tokio::test]
async fn given_slides_out_of_lexicographic_order_when_extracting_then_sorts_numerically() {
    let data = build_pptx(&[
        ("ppt/slides/slide10.xml", slide_xml(&["tenth"]).as_bytes()),
        ("ppt/slides/slide2.xml", slide_xml(&["second"]).as_bytes()),
    ]);
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "second\n\ntenth");
}

#[tokio::test]
async fn given_slide_gaps_when_extracting_then_skips_missing_indices() {
    let data = build_pptx(&[
        ("ppt/slides/slide1.xml", slide_xml(&["Newton's Laws"]).as_bytes()),
        ("ppt/slides/slide3.xml", slide_xml(&["F=ma"]).as_bytes()),
    ]);
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "Newton's Laws\n\nF=ma");
}

#[tokio::test]
async fn given_multiple_runs_in_a_slide_when_extracting_then_joins_with_single_spaces() {
    let data = build_pptx(&[(
        "ppt/slides/slide1.xml",
        slide_xml(&["Cell", "membrane", "structure"]).as_bytes(),
    )]);
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "Cell membrane structure");
}

#[tokio::test]
async fn given_escaped_entities_when_extracting_then_unescapes_them() {
    let data = build_pptx(&[(
        "ppt/slides/slide1.xml",
        slide_xml(&["Acids &amp; Bases"]).as_bytes(),
    )]);
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "Acids & Bases");
}

#[tokio::test]
async fn given_embedded_media_when_extracting_then_appends_recognized_text() {
    let data = build_pptx(&[
        ("ppt/slides/slide1.xml", slide_xml(&["Diagram:"]).as_bytes()),
        ("ppt/media/image1.png", b"fake png bytes"),
    ]);
    let vision = Arc::new(MockVisionClient::returning("Krebs cycle overview"));
    let adapter = PresentationAdapter::new(Arc::clone(&vision) as Arc<dyn VisionClient>);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "Diagram:\n\nKrebs cycle overview");
    assert_eq!(vision.call_count(), 1);
}

#[tokio::test]
async fn given_failing_vision_service_when_extracting_then_keeps_slide_text() {
    let data = build_pptx(&[
        ("ppt/slides/slide1.xml", slide_xml(&["Glycolysis"]).as_bytes()),
        ("ppt/media/image1.jpeg", b"fake jpeg bytes"),
    ]);
    let vision = Arc::new(MockVisionClient::failing("service down"));
    let adapter = PresentationAdapter::new(vision);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "Glycolysis");
}

#[tokio::test]
async fn given_text_free_deck_with_image_slides_when_extracting_then_uses_only_recognized_text() {
    let data = build_pptx(&[
        ("ppt/slides/slide1.xml", slide_xml(&[]).as_bytes()),
        ("ppt/media/image1.png", b"fake png bytes"),
    ]);
    let vision = Arc::new(MockVisionClient::returning("Photosynthesis equation"));
    let adapter = PresentationAdapter::new(vision);

    let text = adapter.extract(&record(data)).await.unwrap();

    assert_eq!(text, "Photosynthesis equation");
}

#[tokio::test]
async fn given_non_zip_bytes_when_extracting_then_returns_malformed_document() {
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);

    let result = adapter.extract(&record(b"definitely not a zip".to_vec())).await;

    assert!(matches!(result, Err(ExtractorError::MalformedDocument(_))));
}

#[tokio::test]
async fn given_archive_without_text_or_media_when_extracting_then_returns_no_text_found() {
    let data = build_pptx(&[("ppt/presentation.xml", b"<p:presentation/>" as &[u8])]);
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);

    let result = adapter.extract(&record(data)).await;

    assert!(matches!(result, Err(ExtractorError::NoTextFound(_))));
}

#[tokio::test]
async fn given_non_presentation_file_when_extracting_then_returns_unsupported() {
    let vision = Arc::new(MockVisionClient::returning(""));
    let adapter = PresentationAdapter::new(vision);
    let record = FileRecord::new(
        "notes.txt".to_string(),
        "text/plain".to_string(),
        b"plain".to_vec(),
    );

    let result = adapter.extract(&record).await;

    assert!(matches!(result, Err(ExtractorError::UnsupportedFormat(_))));
}
