use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CardGenerator, VisionClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{extract_handler, flashcards_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<V, G>(state: AppState<V, G>) -> Router
where
    V: VisionClient + 'static,
    G: CardGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.max_request_size_bytes());

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/extract", post(extract_handler::<V, G>))
        .route("/api/v1/flashcards", post(flashcards_handler::<V, G>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
