mod content_category;
mod file_record;
mod flashcard;
mod outcome;

pub use content_category::ContentCategory;
pub use file_record::{FileId, FileRecord};
pub use flashcard::Flashcard;
pub use outcome::ExtractionOutcome;
