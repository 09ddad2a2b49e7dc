use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CardGenerator, CardGeneratorError, VisionClient};
use crate::application::services::{CardServiceError, aggregate_notes};
use crate::domain::Flashcard;
use crate::presentation::handlers::upload::{ErrorResponse, read_file_records};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct FlashcardsResponse {
    pub cards: Vec<Flashcard>,
    pub notes_chars: usize,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn flashcards_handler<V, G>(
    State(state): State<AppState<V, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    V: VisionClient + 'static,
    G: CardGenerator + 'static,
{
    let records =
        match read_file_records(&mut multipart, state.settings.max_file_size_bytes()).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting flashcards request");
                return (
                    e.status(),
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response();
            }
        };

    tracing::info!(file_count = records.len(), "Building flashcards from uploads");
    let outcomes = state.extraction_service.extract_all(records).await;
    let notes = aggregate_notes(&outcomes, state.settings.limits.max_notes_chars);

    if notes.trim().is_empty() {
        tracing::warn!("No extractable text in any uploaded file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "no extractable text found in uploaded files".to_string(),
            }),
        )
            .into_response();
    }

    match state.card_service.generate_deck(&notes).await {
        Ok(cards) => (
            StatusCode::OK,
            Json(FlashcardsResponse {
                cards,
                notes_chars: notes.chars().count(),
            }),
        )
            .into_response(),
        Err(CardServiceError::Generation(CardGeneratorError::ServiceUnavailable(detail))) => {
            tracing::error!(detail = %detail, "Card generation service unavailable");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "flashcard generation service unavailable".to_string(),
                }),
            )
                .into_response()
        }
        Err(CardServiceError::Generation(CardGeneratorError::InvalidResponse(detail))) => {
            tracing::error!(detail = %detail, "Card generation returned an invalid response");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "flashcard generation returned an invalid response".to_string(),
                }),
            )
                .into_response()
        }
    }
}
