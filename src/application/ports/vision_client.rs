use async_trait::async_trait;

/// Outbound boundary to a vision-capable text service. Given inline
/// image bytes, returns whatever legible text the service can read.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn recognize_text(&self, image: &[u8], mime: &str) -> Result<String, VisionClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VisionClientError {
    #[error("vision service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("invalid vision response: {0}")]
    InvalidResponse(String),
}
