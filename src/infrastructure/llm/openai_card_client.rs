use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{CardGenerator, CardGeneratorError};
use crate::domain::Flashcard;

const CARD_PROMPT: &str = "You are a flashcard author. Given study notes, \
produce concise question/answer flashcards covering the key facts. \
Respond with a JSON array of objects, each with exactly two string \
fields: \"front\" and \"back\". Return only the JSON.";

/// Language-model text service that turns notes into flashcards over
/// the OpenAI chat-completions protocol. The model's reply is parsed
/// leniently: a bare array, an object wrapping one, or a code-fenced
/// blob are all accepted.
pub struct OpenAiCardClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiCardClient {
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
impl CardGenerator for OpenAiCardClient {
    #[tracing::instrument(skip(self, notes), fields(notes_chars = notes.chars().count()))]
    async fn generate(&self, notes: &str) -> Result<Vec<Flashcard>, CardGeneratorError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": CARD_PROMPT },
                { "role": "user", "content": notes }
            ],
            "temperature": 0.3,
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
            .map_err(|e| CardGeneratorError::ServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(CardGeneratorError::ServiceUnavailable(format!(
                "card service returned {status}: {text}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| CardGeneratorError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        parse_cards(&content)
    }
}

/// Accepts a bare `[{front, back}, ...]` array or an object wrapping
/// one under `cards` / `flashcards`, with or without a code fence.
fn parse_cards(content: &str) -> Result<Vec<Flashcard>, CardGeneratorError> {
    let stripped = strip_code_fence(content);

    let value: Value = serde_json::from_str(stripped).map_err(|e| {
        CardGeneratorError::InvalidResponse(format!("model reply is not JSON: {e}"))
    })?;

    let array = match &value {
        Value::Array(_) => &value,
        Value::Object(map) => map
            .get("cards")
            .or_else(|| map.get("flashcards"))
            .ok_or_else(|| {
                CardGeneratorError::InvalidResponse(
                    "model reply object has no cards array".to_string(),
                )
            })?,
        _ => {
            return Err(CardGeneratorError::InvalidResponse(
                "model reply is neither an array nor an object".to_string(),
            ));
        }
    };

    serde_json::from_value(array.clone())
        .map_err(|e| CardGeneratorError::InvalidResponse(format!("malformed card entries: {e}")))
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end_matches('`').trim()
}
