/// Closed classification of an uploaded file, used to select an
/// extraction strategy. `Unknown` is an ordinary value, not an error;
/// the orchestrator decides whether to attempt optical recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    Pdf,
    Presentation,
    PlainText,
    Image,
    Unknown,
}

const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Legacy office formats we conclusively do not parse. Their bytes are
/// zip or binary containers, not images, so the optical fallback is
/// pointless for them.
const KNOWN_UNSUPPORTED_EXTENSIONS: &[&str] = &["doc", "docx", "xls", "xlsx", "ppt"];

impl ContentCategory {
    /// Declared MIME type wins when it maps to a known category; the
    /// filename extension is the fallback when the MIME is absent,
    /// generic, or unrecognized.
    pub fn classify(filename: &str, declared_mime: &str) -> Self {
        match Self::from_mime(declared_mime) {
            Some(category) => category,
            None => Self::from_extension(filename),
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.split(';').next().unwrap_or_default().trim();
        let mime = mime.to_ascii_lowercase();
        match mime.as_str() {
            "application/pdf" => Some(Self::Pdf),
            PPTX_MIME => Some(Self::Presentation),
            "application/json" => Some(Self::PlainText),
            m if m.starts_with("text/") => Some(Self::PlainText),
            m if m.starts_with("image/") => Some(Self::Image),
            _ => None,
        }
    }

    fn from_extension(filename: &str) -> Self {
        match extension_of(filename).as_deref() {
            Some("pdf") => Self::Pdf,
            Some("pptx") => Self::Presentation,
            Some("txt" | "md" | "markdown" | "text") => Self::PlainText,
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp") => Self::Image,
            _ => Self::Unknown,
        }
    }

    /// True for formats we know we cannot extract and that must not be
    /// routed to the optical-recognition fallback.
    pub fn is_known_unsupported(filename: &str) -> bool {
        matches!(
            extension_of(filename).as_deref(),
            Some(ext) if KNOWN_UNSUPPORTED_EXTENSIONS.contains(&ext)
        )
    }
}

fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
