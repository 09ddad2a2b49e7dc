use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CardGenerator, VisionClient};
use crate::application::services::aggregate_notes;
use crate::domain::ExtractionOutcome;
use crate::presentation::config::AggregationMode;
use crate::presentation::handlers::upload::{ErrorResponse, read_file_records};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ExtractionOutcome>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<V, G>(
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
                tracing::warn!(error = %e, "Rejecting extract request");
                return (
                    e.status(),
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response();
            }
        };

    tracing::info!(file_count = records.len(), "Extracting uploaded files");
    let outcomes = state.extraction_service.extract_all(records).await;

    match state.settings.aggregation.mode {
        AggregationMode::Results => {
            (StatusCode::OK, Json(ResultsResponse { results: outcomes })).into_response()
        }
        AggregationMode::Text => {
            let text = aggregate_notes(&outcomes, state.settings.limits.max_notes_chars);
            (StatusCode::OK, Json(TextResponse { text })).into_response()
        }
    }
}
