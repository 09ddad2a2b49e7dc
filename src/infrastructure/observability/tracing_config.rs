/// Configuration for tracing initialization, carried over from the
/// loaded settings and the runtime environment.
pub struct TracingConfig {
    pub level: String,
    pub json_format: bool,
    pub environment: String,
}

impl TracingConfig {
    pub fn new(
        level: impl Into<String>,
        json_format: bool,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            json_format,
            environment: environment.into(),
        }
    }
}
