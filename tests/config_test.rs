use flashdeck::infrastructure::observability::TracingConfig;
use flashdeck::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_local_string_when_parsing_environment_then_returns_local() {
    let environment: Environment = "local".to_string().try_into().unwrap();

    assert_eq!(environment, Environment::Local);
}

#[test]
fn given_production_alias_when_parsing_environment_then_returns_prod() {
    let environment: Environment = "production".to_string().try_into().unwrap();

    assert_eq!(environment, Environment::Prod);
    assert_eq!(environment.to_string(), "Prod");
}

#[test]
fn given_unknown_environment_string_when_parsing_then_returns_error() {
    let result: Result<Environment, _> = "staging".to_string().try_into();

    assert!(result.is_err());
}

#[test]
fn given_logging_settings_when_building_tracing_config_then_carries_level_and_format() {
    let logging = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::new(
        logging.level.as_str(),
        logging.enable_json,
        Environment::Test.to_string(),
    );

    assert_eq!(config.level, "debug");
    assert!(config.json_format);
    assert_eq!(config.environment, "Test");
}
