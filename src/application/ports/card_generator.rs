use async_trait::async_trait;

use crate::domain::Flashcard;

/// Outbound boundary to the language-model text service that turns
/// normalized notes into flashcards.
#[async_trait]
pub trait CardGenerator: Send + Sync {
    async fn generate(&self, notes: &str) -> Result<Vec<Flashcard>, CardGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CardGeneratorError {
    #[error("card generation service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("invalid card generation response: {0}")]
    InvalidResponse(String),
}
