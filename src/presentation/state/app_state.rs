use std::sync::Arc;

use crate::application::ports::{CardGenerator, VisionClient};
use crate::application::services::{CardService, ExtractionService};
use crate::presentation::config::Settings;

pub struct AppState<V, G>
where
    V: VisionClient,
    G: CardGenerator,
{
    pub extraction_service: Arc<ExtractionService<V>>,
    pub card_service: Arc<CardService<G>>,
    pub settings: Settings,
}

impl<V, G> Clone for AppState<V, G>
where
    V: VisionClient,
    G: CardGenerator,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            card_service: Arc::clone(&self.card_service),
            settings: self.settings.clone(),
        }
    }
}
