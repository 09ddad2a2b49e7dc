use std::sync::Arc;

use crate::application::ports::{CardGenerator, CardGeneratorError};
use crate::domain::Flashcard;

/// Turns a normalized notes blob into a bounded flashcard deck. Cards
/// with an empty front or back are dropped before the cap applies.
pub struct CardService<G>
where
    G: CardGenerator,
{
    generator: Arc<G>,
    max_cards: usize,
}

impl<G> CardService<G>
where
    G: CardGenerator,
{
    pub fn new(generator: Arc<G>, max_cards: usize) -> Self {
        Self {
            generator,
            max_cards,
        }
    }

    #[tracing::instrument(skip(self, notes), fields(notes_chars = notes.chars().count()))]
    pub async fn generate_deck(&self, notes: &str) -> Result<Vec<Flashcard>, CardServiceError> {
        let cards = self.generator.generate(notes).await?;
        let total = cards.len();

        let deck: Vec<Flashcard> = cards
            .into_iter()
            .filter(Flashcard::is_complete)
            .take(self.max_cards)
            .collect();

        tracing::info!(generated = total, kept = deck.len(), "Flashcard deck assembled");
        Ok(deck)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CardServiceError {
    #[error("card generation: {0}")]
    Generation(#[from] CardGeneratorError),
}
