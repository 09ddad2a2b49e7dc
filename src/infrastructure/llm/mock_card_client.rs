use async_trait::async_trait;

use crate::application::ports::{CardGenerator, CardGeneratorError};
use crate::domain::Flashcard;

enum Behavior {
    Cards(Vec<Flashcard>),
    Unavailable(String),
}

/// Test double for the card generation service.
pub struct MockCardClient {
    behavior: Behavior,
}

impl MockCardClient {
    pub fn returning(cards: Vec<Flashcard>) -> Self {
        Self {
            behavior: Behavior::Cards(cards),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            behavior: Behavior::Unavailable(message.to_string()),
        }
    }
}

#[async_trait]
impl CardGenerator for MockCardClient {
    async fn generate(&self, _notes: &str) -> Result<Vec<Flashcard>, CardGeneratorError> {
        match &self.behavior {
            Behavior::Cards(cards) => Ok(cards.clone()),
            Behavior::Unavailable(message) => {
                Err(CardGeneratorError::ServiceUnavailable(message.clone()))
            }
        }
    }
}
