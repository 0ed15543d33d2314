//! Serialization tests for the containers and platform data types.

#![cfg(all(feature = "serde", feature = "platform"))]

use funcy::control::{Either, Maybe};
use funcy::platform::{ConnectConfig, ConnectionState, ConnectionStatus, Credentials};
use rstest::rstest;

#[rstest]
#[case(Maybe::just(7), "7")]
#[case(Maybe::nothing(), "null")]
fn maybe_serializes_transparently(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    let restored: Maybe<i32> = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn either_uses_variant_tags() {
    let success: Either<u8, String> = Either::right(1);
    let failure: Either<u8, String> = Either::left("x".to_string());

    assert_eq!(serde_json::to_string(&success).unwrap(), r#"{"Right":1}"#);
    assert_eq!(serde_json::to_string(&failure).unwrap(), r#"{"Left":"x"}"#);
}

#[rstest]
fn config_fields_default_when_absent() {
    let config: ConnectConfig = serde_json::from_str(r#"{"timeout_ms": 4000}"#).unwrap();
    assert_eq!(config.timeout_ms, 4000);
    assert_eq!(config.retry_interval_ms, ConnectConfig::DEFAULT_RETRY_INTERVAL_MS);
}

#[rstest]
#[case(r#"{"timeout_ms": 100, "retry_interval_ms": 0}"#, "retry interval must be greater than zero")]
#[case(r#"{"retry_interval_ms": 0}"#, "retry interval must be greater than zero")]
#[case(r#"{"timeout_ms": 100}"#, "retry interval 500ms exceeds timeout 100ms")]
fn config_deserialization_applies_validation(#[case] json: &str, #[case] message: &str) {
    let error = serde_json::from_str::<ConnectConfig>(json).unwrap_err();
    assert!(error.to_string().contains(message), "unexpected error: {error}");
}

#[rstest]
fn config_serializes_both_fields() {
    let config = ConnectConfig::new(2000, 250).unwrap();
    let json = serde_json::to_value(config).unwrap();

    assert_eq!(json["timeout_ms"], 2000);
    assert_eq!(json["retry_interval_ms"], 250);
    assert_eq!(serde_json::from_value::<ConnectConfig>(json).unwrap(), config);
}

#[rstest]
fn credentials_never_serialize_the_password() {
    let credentials = Credentials::new("lab", "s3cret");
    let json = serde_json::to_string(&credentials).unwrap();

    assert_eq!(json, r#"{"ssid":"lab"}"#);
    assert!(!json.contains("s3cret"));
}

#[rstest]
fn credentials_read_the_password_when_present() {
    let credentials: Credentials =
        serde_json::from_str(r#"{"ssid":"lab","password":"x"}"#).unwrap();
    assert_eq!(credentials, Credentials::new("lab", "x"));

    let without: Credentials = serde_json::from_str(r#"{"ssid":"lab"}"#).unwrap();
    assert_eq!(without.password, "");
}

#[rstest]
fn connection_state_round_trips() {
    let state = ConnectionState {
        address: Maybe::just("10.1.1.5".to_string()),
        status: ConnectionStatus::Connected,
        message: "up".to_string(),
    };
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["address"], "10.1.1.5");
    assert_eq!(json["status"], "Connected");
    assert_eq!(serde_json::from_value::<ConnectionState>(json).unwrap(), state);
}
