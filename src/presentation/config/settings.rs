use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub limits: LimitsSettings,
    pub llm: LlmSettings,
    pub aggregation: AggregationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsSettings {
    /// Per-file upload cap; exceeding it rejects the request rather
    /// than silently truncating.
    pub max_file_size_mb: usize,
    /// Whole-request body cap across all parts.
    pub max_request_size_mb: usize,
    /// Hard character cap on the aggregated notes blob.
    pub max_notes_chars: usize,
    /// Deck size cap after filtering incomplete cards.
    pub max_cards: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub vision_model: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregationSettings {
    pub mode: AggregationMode,
}

/// Response shape of the extract endpoint: one concatenated notes blob
/// or the per-file outcome list. Both consume the same outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    Text,
    Results,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layered load: `config/default.toml` if present, overridden by
    /// `FLASHDECK_`-prefixed environment variables
    /// (e.g. `FLASHDECK_SERVER__PORT=8080`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("limits.max_file_size_mb", 16)?
            .set_default("limits.max_request_size_mb", 64)?
            .set_default("limits.max_notes_chars", 12_000)?
            .set_default("limits.max_cards", 20)?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", "https://api.openai.com")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.vision_model", "gpt-4o-mini")?
            .set_default("llm.request_timeout_seconds", 120)?
            .set_default("aggregation.mode", "text")?
            .set_default("logging.level", "info,flashdeck=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("FLASHDECK").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.limits.max_file_size_mb * 1024 * 1024
    }

    pub fn max_request_size_bytes(&self) -> usize {
        self.limits.max_request_size_mb * 1024 * 1024
    }
}
