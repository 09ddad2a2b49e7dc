mod image_ocr_adapter;
mod mock_text_extractor;
mod pdf_adapter;
mod plain_text_adapter;
mod presentation_adapter;
mod text_sanitizer;

pub use image_ocr_adapter::ImageOcrAdapter;
pub use mock_text_extractor::MockTextExtractor;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use presentation_adapter::PresentationAdapter;
pub use text_sanitizer::sanitize_extracted_text;
