mod aggregator;
mod card_service;
mod extraction_service;

pub use aggregator::aggregate_notes;
pub use card_service::{CardService, CardServiceError};
pub use extraction_service::ExtractionService;
