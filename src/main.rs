use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use flashdeck::application::ports::{TextExtractor, VisionClient};
use flashdeck::application::services::{CardService, ExtractionService};
use flashdeck::domain::ContentCategory;
use flashdeck::infrastructure::llm::{OpenAiCardClient, OpenAiVisionClient};
use flashdeck::infrastructure::observability::{TracingConfig, init_tracing};
use flashdeck::infrastructure::text_processing::{
    ImageOcrAdapter, PdfAdapter, PlainTextAdapter, PresentationAdapter,
};
use flashdeck::presentation::config::Environment;
use flashdeck::presentation::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = flashdeck::presentation::Settings::load()?;
    let port = settings.server.port;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    init_tracing(
        TracingConfig::new(
            settings.logging.level.as_str(),
            settings.logging.enable_json,
            environment.to_string(),
        ),
        port,
    );

    let timeout = Duration::from_secs(settings.llm.request_timeout_seconds);
    let vision = Arc::new(OpenAiVisionClient::new(
        &settings.llm.base_url,
        &settings.llm.vision_model,
        &settings.llm.api_key,
        timeout,
    ));
    let card_client = Arc::new(OpenAiCardClient::new(
        &settings.llm.base_url,
        &settings.llm.chat_model,
        &settings.llm.api_key,
        timeout,
    ));

    let vision_port: Arc<dyn VisionClient> = vision.clone();
    let extractors: Vec<(ContentCategory, Arc<dyn TextExtractor>)> = vec![
        (ContentCategory::Pdf, Arc::new(PdfAdapter::new())),
        (
            ContentCategory::Presentation,
            Arc::new(PresentationAdapter::new(Arc::clone(&vision_port))),
        ),
        (ContentCategory::PlainText, Arc::new(PlainTextAdapter)),
        (
            ContentCategory::Image,
            Arc::new(ImageOcrAdapter::new(Arc::clone(&vision_port))),
        ),
    ];

    let extraction_service = Arc::new(ExtractionService::new(extractors, Arc::clone(&vision)));
    let card_service = Arc::new(CardService::new(
        Arc::clone(&card_client),
        settings.limits.max_cards,
    ));

    let host: std::net::IpAddr = settings.server.host.parse()?;
    let state = AppState {
        extraction_service,
        card_service,
        settings,
    };

    let router = create_router(state);

    let addr = SocketAddr::from((host, port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
