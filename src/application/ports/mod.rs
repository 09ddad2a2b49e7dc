mod card_generator;
mod text_extractor;
mod vision_client;

pub use card_generator::{CardGenerator, CardGeneratorError};
pub use text_extractor::{ExtractorError, TextExtractor};
pub use vision_client::{VisionClient, VisionClientError};
