use lay_config::{ConfigError, ConfigRecord, ConfigSource, Provider, Settings};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn frontend_payload_round_trips_through_the_backend_view() {
    let payload = r#"{
        "anthropicKey": "sk-ant-api03-0123456789",
        "openaiKey": "",
        "model": "claude-sonnet-4-6"
    }"#;

    let record = ConfigRecord::create_from(payload).unwrap();
    let value = serde_json::to_value(&record).unwrap();
    let settings = Settings::resolve(ConfigSource::Structured(value)).unwrap();

    assert_eq!(settings.provider(), Provider::Anthropic);
    assert_eq!(settings.active_key().unwrap(), "sk-ant-api03-0123456789");
    assert_eq!(ConfigRecord::from(settings), record);
}

#[test]
fn records_built_concurrently_do_not_interfere() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                ConfigRecord::new(json!({ "model": format!("gpt-{i}") })).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let record = handle.join().unwrap();
        assert_eq!(record.model, Some(format!("gpt-{i}")));
        assert_eq!(record.anthropic_key, None);
    }
}

#[test]
fn parse_errors_reach_the_caller() {
    let err = ConfigRecord::new("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config JSON"));
}
