use std::io::{Cursor, Read};
use std::sync::Arc;
use std::sync::LazyLock;

use async_trait::async_trait;
use quick_xml::events::Event;
use regex::Regex;

use crate::application::ports::{ExtractorError, TextExtractor, VisionClient};
use crate::domain::{ContentCategory, FileRecord};

static SLIDE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap());

/// Primary strategy for slide-deck uploads (pptx). Treats the buffer as
/// a zip archive, pulls text runs out of the per-slide markup in
/// numeric slide order, then runs every embedded media image through
/// optical recognition — decks frequently carry their content as
/// images rather than text runs.
///
/// Failure to open the archive at all fails the file; unreadable
/// individual slide entries are skipped.
pub struct PresentationAdapter {
    vision: Arc<dyn VisionClient>,
}

struct MediaEntry {
    name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl PresentationAdapter {
    pub fn new(vision: Arc<dyn VisionClient>) -> Self {
        Self { vision }
    }

    fn parse_archive(data: &[u8]) -> Result<(Vec<String>, Vec<MediaEntry>), ExtractorError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            ExtractorError::MalformedDocument(format!("failed to open archive: {e}"))
        })?;

        let entry_names: Vec<String> = archive.file_names().map(String::from).collect();

        // Numeric ordering: slide10 sorts after slide2, not after slide1.
        let mut slides: Vec<(u32, String)> = Vec::new();
        for name in &entry_names {
            let Some(captures) = SLIDE_ENTRY.captures(name) else {
                continue;
            };
            let Ok(index) = captures[1].parse::<u32>() else {
                continue;
            };

            let mut xml = String::new();
            let readable = archive
                .by_name(name)
                .ok()
                .and_then(|mut entry| entry.read_to_string(&mut xml).ok())
                .is_some();
            if !readable {
                tracing::warn!(entry = %name, "Skipping unreadable slide entry");
                continue;
            }

            let text = slide_text_runs(&xml);
            if !text.is_empty() {
                slides.push((index, text));
            }
        }
        slides.sort_by_key(|(index, _)| *index);

        let mut media = Vec::new();
        for name in &entry_names {
            if !name.starts_with("ppt/media/") {
                continue;
            }
            let Some(mime) = image_mime(name) else {
                continue;
            };

            let mut bytes = Vec::new();
            if let Ok(mut entry) = archive.by_name(name) {
                if entry.read_to_end(&mut bytes).is_ok() && !bytes.is_empty() {
                    media.push(MediaEntry {
                        name: name.clone(),
                        mime,
                        bytes,
                    });
                }
            }
        }

        Ok((slides.into_iter().map(|(_, text)| text).collect(), media))
    }
}

#[async_trait]
impl TextExtractor for PresentationAdapter {
    #[tracing::instrument(
        skip(self, record),
        fields(file_id = %record.id.as_uuid(), filename = %record.filename)
    )]
    async fn extract(&self, record: &FileRecord) -> Result<String, ExtractorError> {
        let category = ContentCategory::classify(&record.filename, &record.declared_mime);
        if category != ContentCategory::Presentation {
            return Err(ExtractorError::UnsupportedFormat(record.filename.clone()));
        }

        let (mut sections, media) = Self::parse_archive(&record.content)?;
        tracing::info!(
            slide_count = sections.len(),
            media_count = media.len(),
            "Slide markup scan complete"
        );

        for entry in media {
            match self.vision.recognize_text(&entry.bytes, entry.mime).await {
                Ok(text) if !text.trim().is_empty() => sections.push(text.trim().to_string()),
                Ok(_) => {}
                Err(error) => {
                    // One unreadable embedded image does not fail the deck.
                    tracing::warn!(entry = %entry.name, error = %error, "Embedded image recognition failed");
                }
            }
        }

        if sections.is_empty() {
            return Err(ExtractorError::NoTextFound(record.filename.clone()));
        }

        Ok(sections.join("\n\n"))
    }
}

/// Scans one slide's markup for `a:t` text runs, unescaping entities
/// and joining runs with single spaces. Malformed markup ends the scan
/// rather than failing the slide.
fn slide_text_runs(xml: &str) -> String {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut runs: Vec<String> = Vec::new();
    let mut in_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => in_run = true,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => in_run = false,
            Ok(Event::Text(e)) if in_run => {
                if let Ok(text) = e.unescape() {
                    let text = text.trim();
                    if !text.is_empty() {
                        runs.push(text.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    runs.join(" ")
}

fn image_mime(entry_name: &str) -> Option<&'static str> {
    let ext = entry_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
