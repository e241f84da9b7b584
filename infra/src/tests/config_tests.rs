//! Unit tests for the file configuration provider

use std::io::Write;

use serde_json::json;
use sms_core::{ConfigProvider, SmsError};

use crate::config::FileConfigProvider;
use crate::InfrastructureError;

const CONFIGS: &str = r#"
[default]
transportName = "Debug"
sender = "+491745764587"

[marketing]
transportName = "Memory"
recipients = ["+49123456789", "+49987654321"]
priority = 2
log = { level = "notice", scope = "marketing" }
"#;

#[test]
fn test_lookup_named_configuration() {
    let provider = FileConfigProvider::from_toml(CONFIGS).unwrap();

    let default = provider.lookup("default").unwrap();
    assert_eq!(default.get("transportname"), Some(&json!("Debug")));
    assert_eq!(default.get("sender"), Some(&json!("+491745764587")));

    let marketing = provider.lookup("marketing").unwrap();
    assert_eq!(
        marketing.get("recipients"),
        Some(&json!(["+49123456789", "+49987654321"]))
    );
    assert_eq!(marketing.get("priority"), Some(&json!(2)));
    assert_eq!(marketing.get("log"), Some(&json!({"level": "notice", "scope": "marketing"})));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let provider = FileConfigProvider::from_toml(CONFIGS).unwrap();
    assert!(provider.contains("Marketing"));
    assert!(provider.lookup("DEFAULT").is_ok());
}

#[test]
fn test_option_keys_arrive_lowercased() {
    let provider =
        FileConfigProvider::from_toml("[gateway]\ntransportName = \"Memory\"\napiKey = \"s3cr3t\"\n")
            .unwrap();

    let options = provider.lookup("gateway").unwrap();
    assert_eq!(options.get("transportname"), Some(&json!("Memory")));
    assert_eq!(options.get("apikey"), Some(&json!("s3cr3t")));
    assert!(options.get("transportName").is_none());
    assert!(options.get("apiKey").is_none());
}

#[test]
fn test_unknown_configuration() {
    let provider = FileConfigProvider::from_toml(CONFIGS).unwrap();

    assert!(!provider.contains("billing"));
    match provider.lookup("billing") {
        Err(SmsError::ConfigurationMissing(msg)) => assert!(msg.contains("billing")),
        other => panic!("Expected ConfigurationMissing, got {:?}", other),
    }
}

#[test]
fn test_scalar_entry_is_invalid_configuration() {
    let provider = FileConfigProvider::from_toml("transport = \"Debug\"\n").unwrap();

    let error = provider.lookup("transport").unwrap_err();
    assert_eq!(error.code(), "INVALID_CONFIGURATION");
}

#[test]
fn test_from_path() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(CONFIGS.as_bytes()).unwrap();

    let provider = FileConfigProvider::from_path(file.path()).unwrap();
    assert_eq!(provider.source(), Some(file.path()));
    assert!(provider.contains("marketing"));
}

#[test]
fn test_missing_file() {
    let result = FileConfigProvider::from_path("/nonexistent/sms.toml");
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_malformed_file() {
    let result = FileConfigProvider::from_toml("[marketing\ntransport = ");
    assert!(matches!(result, Err(InfrastructureError::Settings(_))));
}

#[test]
fn test_environment_override() {
    std::env::set_var("SMS__OVERRIDDEN__SENDER", "+49111222333");
    let provider = FileConfigProvider::from_toml(
        "[overridden]\nsender = \"+491745764587\"\ntransportName = \"Console\"\n",
    )
    .unwrap();
    std::env::remove_var("SMS__OVERRIDDEN__SENDER");

    let options = provider.lookup("overridden").unwrap();
    assert_eq!(options.get("sender"), Some(&json!("+49111222333")));
    assert_eq!(options.get("transportname"), Some(&json!("Console")));
}
