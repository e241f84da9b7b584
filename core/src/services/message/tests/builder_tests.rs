//! Unit tests for recipient, sender, pattern and transport management

use serde_json::json;

use super::mocks::{opts, TestRegistry};
use crate::errors::SmsError;
use crate::services::message::{LayoutChoice, MessageBuilder, SendStage};

#[test]
fn test_new_builder_is_empty() {
    let sms = MessageBuilder::default();
    assert!(sms.recipients().is_empty());
    assert_eq!(sms.sender(), "");
    assert_eq!(sms.message_body(), "");
    assert!(sms.config().is_empty());
    assert_eq!(sms.transport_name(), "Debug");
    assert_eq!(sms.number_pattern(), Some(r"^\+\d+$"));
    assert_eq!(sms.template_name(), None);
    assert_eq!(sms.layout_name(), Some("default"));
    assert_eq!(sms.stage(), SendStage::Idle);
}

#[test]
fn test_set_and_add_recipients() {
    let mut sms = MessageBuilder::default();

    sms.set_recipients("+491234567890").unwrap();
    assert_eq!(sms.recipients(), ["+491234567890"]);

    sms.set_recipients(["+491234567890", "+49987654321"]).unwrap();
    assert_eq!(sms.recipients(), ["+491234567890", "+49987654321"]);

    sms.add_recipients("+4924682468").unwrap();
    sms.add_recipients(["+493690369", "+491357913579"]).unwrap();
    assert_eq!(
        sms.recipients(),
        [
            "+491234567890",
            "+49987654321",
            "+4924682468",
            "+493690369",
            "+491357913579",
        ]
    );
}

#[test]
fn test_setters_chain() {
    let mut sms = MessageBuilder::default();
    sms.set_recipients("+49123456789")
        .unwrap()
        .add_recipients("+49123456789")
        .unwrap()
        .set_sender("+491745764587")
        .unwrap();

    // duplicates are kept
    assert_eq!(sms.recipients(), ["+49123456789", "+49123456789"]);
    assert_eq!(sms.sender(), "+491745764587");
}

#[test]
fn test_add_recipients_is_associative() {
    let first = ["+4911", "+4922"];
    let second = ["+4933", "+4911"];

    let mut twice = MessageBuilder::default();
    twice.add_recipients(first).unwrap();
    twice.add_recipients(second).unwrap();

    let mut once = MessageBuilder::default();
    once.add_recipients(vec!["+4911", "+4922", "+4933", "+4911"]).unwrap();

    assert_eq!(twice.recipients(), once.recipients());
}

#[test]
fn test_invalid_recipient_leaves_list_untouched() {
    let mut sms = MessageBuilder::default();
    sms.set_recipients(["+4911", "+4922"]).unwrap();

    let result = sms.set_recipients(["+4933", "123456789"]);
    match result {
        Err(SmsError::InvalidPhoneNumber { number }) => assert_eq!(number, "123456789"),
        other => panic!("expected InvalidPhoneNumber, got {:?}", other.map(|_| ())),
    }
    assert_eq!(sms.recipients(), ["+4911", "+4922"]);

    assert!(sms.add_recipients(["+4944", "not a number"]).is_err());
    assert_eq!(sms.recipients(), ["+4911", "+4922"]);
}

#[test]
fn test_default_pattern_rejects_bare_digits() {
    let mut sms = MessageBuilder::default();
    assert!(matches!(
        sms.set_recipients("123456789"),
        Err(SmsError::InvalidPhoneNumber { .. })
    ));
    assert!(sms.set_recipients("+49123456789").is_ok());
}

#[test]
fn test_numeric_fallback_without_pattern() {
    let mut sms = MessageBuilder::default();
    sms.set_number_pattern(None).unwrap();
    assert_eq!(sms.number_pattern(), None);

    assert!(sms.set_recipients("123456789").is_ok());
    assert!(matches!(
        sms.add_recipients("+49123456789"),
        Err(SmsError::InvalidPhoneNumber { .. })
    ));
    assert_eq!(sms.recipients(), ["123456789"]);
}

#[test]
fn test_custom_pattern() {
    let mut sms = MessageBuilder::default();
    sms.set_number_pattern(Some(r"0\d{9,11}")).unwrap();
    assert_eq!(sms.number_pattern(), Some(r"0\d{9,11}"));

    assert!(sms.set_recipients("01745764587").is_ok());
    assert!(sms.set_recipients("+491745764587").is_err());
    assert!(sms.set_number_pattern(Some("(")).is_err());
    // a rejected pattern leaves the previous one active
    assert_eq!(sms.number_pattern(), Some(r"0\d{9,11}"));
}

#[test]
fn test_sender() {
    let mut sms = MessageBuilder::default();
    assert_eq!(sms.sender(), "");

    sms.set_sender("+49123456789").unwrap();
    assert_eq!(sms.sender(), "+49123456789");

    // empty keeps the previous sender
    sms.set_sender("").unwrap();
    assert_eq!(sms.sender(), "+49123456789");

    assert!(sms.set_sender("0049").is_err());
    assert_eq!(sms.sender(), "+49123456789");
}

#[test]
fn test_transport_resolution_is_cached() {
    let registry = TestRegistry::new();
    let mut sms = registry.builder();

    assert_eq!(sms.resolve_transport().unwrap().name(), "Recording");
    sms.resolve_transport().unwrap();
    assert_eq!(registry.built(), 1);
}

#[test]
fn test_rename_invalidates_cached_transport() {
    let registry = TestRegistry::new();
    let mut sms = registry.builder();

    sms.resolve_transport()
        .unwrap()
        .configure(opts(json!({"marker": "first instance"})));

    sms.set_transport_name("Recording");
    let transport = sms.resolve_transport().unwrap();
    assert!(transport.options().get("marker").is_none());
    assert_eq!(registry.built(), 2);
}

#[test]
fn test_switching_transports() {
    let mut sms = TestRegistry::new().builder();
    sms.set_transport_name("Debug");
    assert_eq!(sms.transport_name(), "Debug");
    assert_eq!(sms.resolve_transport().unwrap().name(), "Debug");
}

#[test]
fn test_unknown_transport() {
    let mut sms = MessageBuilder::default();
    sms.set_transport_name("Invalid");

    match sms.resolve_transport() {
        Err(SmsError::TransportNotFound { name, identifier }) => {
            assert_eq!(name, "Invalid");
            assert_eq!(identifier, "InvalidTransport");
        }
        other => panic!("expected TransportNotFound, got {:?}", other.map(|t| t.name().to_string())),
    }
}

#[test]
fn test_broken_factory_is_invalid_transport() {
    let mut sms = TestRegistry::new().builder();
    sms.set_transport_name("Broken");

    match sms.resolve_transport() {
        Err(SmsError::TransportInvalid { name, reason }) => {
            assert_eq!(name, "Broken");
            assert!(reason.contains("credentials"));
        }
        other => panic!("expected TransportInvalid, got {:?}", other.map(|t| t.name().to_string())),
    }
}

#[test]
fn test_template_settings() {
    let mut sms = MessageBuilder::default();

    sms.set_template(Some("you_got_mail"), LayoutChoice::Keep);
    assert_eq!(sms.template_name(), Some("you_got_mail"));
    assert_eq!(sms.layout_name(), Some("default"));

    sms.set_template(Some("you_got_mail"), "my_layout");
    assert_eq!(sms.layout_name(), Some("my_layout"));

    sms.set_template(Some("you_got_mail"), LayoutChoice::None);
    assert_eq!(sms.layout_name(), None);

    sms.set_template(None, LayoutChoice::Keep);
    assert_eq!(sms.template_name(), None);
}

#[test]
fn test_view_vars_merge_and_helpers_replace() {
    let mut sms = MessageBuilder::default();
    sms.set_view_vars(opts(json!({"name": "Ada", "code": 1})));
    sms.set_view_vars(opts(json!({"code": 2})));
    assert_eq!(sms.view_vars(), &opts(json!({"name": "Ada", "code": 2})));

    sms.set_helpers(["Number", "Text"]);
    sms.set_helpers(vec!["Time".to_string()]);
    assert_eq!(sms.helpers(), ["Time"]);

    sms.set_theme(Some("Dark"));
    assert_eq!(sms.theme(), Some("Dark"));
}

#[test]
fn test_reset_keeps_transport_and_template() {
    let registry = TestRegistry::new();
    let mut sms = registry.builder();
    sms.set_recipients("+49123456789").unwrap();
    sms.set_sender("+491745764587").unwrap();
    sms.configure(opts(json!({"log": true}))).unwrap();
    sms.send("hello").unwrap();
    sms.set_template(Some("you_got_mail"), "my_layout");

    sms.reset();

    assert!(sms.recipients().is_empty());
    assert_eq!(sms.sender(), "");
    assert_eq!(sms.message_body(), "");
    assert!(sms.config().is_empty());
    assert_eq!(sms.transport_name(), "Recording");
    assert_eq!(sms.template_name(), Some("you_got_mail"));
    assert_eq!(sms.layout_name(), Some("my_layout"));

    // the cached transport survives the reset
    sms.resolve_transport().unwrap();
    assert_eq!(registry.built(), 1);
}
