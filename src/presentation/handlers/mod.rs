mod extract;
mod flashcards;
mod health;
mod upload;

pub use extract::extract_handler;
pub use flashcards::flashcards_handler;
pub use health::health_handler;
pub use upload::{ErrorResponse, read_file_records};
