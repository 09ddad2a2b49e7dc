use flashdeck::domain::ContentCategory;

#[test]
fn given_pdf_mime_when_classifying_then_returns_pdf() {
    let category = ContentCategory::classify("notes.bin", "application/pdf");
    assert_eq!(category, ContentCategory::Pdf);
}

#[test]
fn given_pptx_mime_when_classifying_then_returns_presentation() {
    let category = ContentCategory::classify(
        "deck",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    );
    assert_eq!(category, ContentCategory::Presentation);
}

#[test]
fn given_text_mime_with_charset_parameter_when_classifying_then_returns_plain_text() {
    let category = ContentCategory::classify("notes", "text/plain; charset=utf-8");
    assert_eq!(category, ContentCategory::PlainText);
}

#[test]
fn given_image_mime_when_classifying_then_returns_image() {
    let category = ContentCategory::classify("scan", "image/jpeg");
    assert_eq!(category, ContentCategory::Image);
}

#[test]
fn given_generic_mime_when_classifying_then_falls_back_to_extension() {
    let category = ContentCategory::classify("lecture.PDF", "application/octet-stream");
    assert_eq!(category, ContentCategory::Pdf);
}

#[test]
fn given_missing_mime_when_classifying_then_extension_is_case_insensitive() {
    assert_eq!(
        ContentCategory::classify("slides.PpTx", ""),
        ContentCategory::Presentation
    );
    assert_eq!(
        ContentCategory::classify("photo.JPEG", ""),
        ContentCategory::Image
    );
}

#[test]
fn given_recognized_mime_when_classifying_then_mime_wins_over_extension() {
    // Declared type takes precedence over a misleading extension.
    let category = ContentCategory::classify("export.txt", "application/pdf");
    assert_eq!(category, ContentCategory::Pdf);
}

#[test]
fn given_unrecognized_mime_and_extension_when_classifying_then_returns_unknown() {
    let category = ContentCategory::classify("archive.tar", "application/x-tar");
    assert_eq!(category, ContentCategory::Unknown);
}

#[test]
fn given_filename_without_extension_when_classifying_then_returns_unknown() {
    let category = ContentCategory::classify("README", "");
    assert_eq!(category, ContentCategory::Unknown);
}

#[test]
fn given_legacy_office_files_when_checking_then_flagged_known_unsupported() {
    assert!(ContentCategory::is_known_unsupported("essay.docx"));
    assert!(ContentCategory::is_known_unsupported("essay.DOC"));
    assert!(ContentCategory::is_known_unsupported("grades.xlsx"));
    assert!(!ContentCategory::is_known_unsupported("notes.txt"));
    assert!(!ContentCategory::is_known_unsupported("mystery.bin"));
}
