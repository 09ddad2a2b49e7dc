mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AggregationMode, AggregationSettings, LimitsSettings, LlmSettings, LoggingSettings,
    ServerSettings, Settings,
};
