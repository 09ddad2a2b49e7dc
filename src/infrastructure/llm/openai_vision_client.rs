use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{VisionClient, VisionClientError};

pub const OCR_PROMPT: &str = "Extract all legible text from this image. \
Transcribe handwriting as best you can. Return only the extracted text, \
with no commentary.";

/// Vision-capable text service speaking the OpenAI chat-completions
/// protocol. One request per image, no implicit retry; upstream error
/// detail is preserved in the returned error for diagnostics.
pub struct OpenAiVisionClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiVisionClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl VisionClient for OpenAiVisionClient {
    #[tracing::instrument(skip(self, image), fields(bytes = image.len(), mime = %mime))]
    async fn recognize_text(&self, image: &[u8], mime: &str) -> Result<String, VisionClientError> {
        let mime = if mime.starts_with("image/") {
            mime
        } else {
            // Raw bytes routed here by the fallback path carry whatever
            // the upload declared; the service only needs a plausible tag.
            "image/png"
        };

        let b64 = general_purpose::STANDARD.encode(image);
        let data_uri = format!("data:{mime};base64,{b64}");

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": { "url": data_uri }
                        },
                        {
                            "type": "text",
                            "text": OCR_PROMPT
                        }
                    ]
                }
            ],
            "max_tokens": 2048,
            "temperature": 0.0,
            "stream": false
        });

        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| VisionClientError::ServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(VisionClientError::ServiceUnavailable(format!(
                "vision service returned {status}: {text}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| VisionClientError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
