mod mock_card_client;
mod mock_vision_client;
mod openai_card_client;
mod openai_vision_client;

pub use mock_card_client::MockCardClient;
pub use mock_vision_client::MockVisionClient;
pub use openai_card_client::OpenAiCardClient;
pub use openai_vision_client::{OCR_PROMPT, OpenAiVisionClient};
