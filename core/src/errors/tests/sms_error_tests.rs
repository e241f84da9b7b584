//! Unit tests for SMS error types

use crate::errors::{RenderError, SmsError, TransportError};

#[test]
fn test_invalid_phone_number_message() {
    let error = SmsError::InvalidPhoneNumber {
        number: "123456789".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid phone number: \"123456789\"");
    assert_eq!(error.code(), "INVALID_PHONE_NUMBER");
}

#[test]
fn test_transport_not_found_names_identifier() {
    let error = SmsError::TransportNotFound {
        name: "Invalid".to_string(),
        identifier: "InvalidTransport".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("InvalidTransport"));
    assert!(message.contains("\"Invalid\""));
    assert_eq!(error.code(), "TRANSPORT_NOT_FOUND");
}

#[test]
fn test_delivery_error_is_transparent() {
    let error: SmsError = TransportError::rejected("Memory", "gateway said no").into();
    assert_eq!(error.to_string(), "Message rejected by Memory: gateway said no");
    assert!(matches!(error, SmsError::Transport(TransportError::Rejected { .. })));
    assert_eq!(error.code(), "DELIVERY_FAILED");
}

#[test]
fn test_boxed_delivery_error() {
    let inner: Box<dyn std::error::Error + Send + Sync> = "socket closed".into();
    let error: SmsError = TransportError::from(inner).into();
    assert_eq!(error.to_string(), "socket closed");
}

#[test]
fn test_render_error_conversion() {
    let error: SmsError = RenderError::MissingTemplate {
        name: "you_got_mail".to_string(),
    }
    .into();
    assert_eq!(error.code(), "RENDER_FAILED");
    assert!(error.to_string().contains("you_got_mail"));
}
