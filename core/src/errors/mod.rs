//! Error types for building and sending SMS messages.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{RenderError, TransportError};

use thiserror::Error;

/// Errors raised by the message builder and transport resolution
#[derive(Error, Debug)]
pub enum SmsError {
    #[error("Invalid phone number: \"{number}\"")]
    InvalidPhoneNumber { number: String },

    #[error("You need to specify at least one recipient")]
    NoRecipients,

    #[error("Transport \"{identifier}\" not found for transport name \"{name}\"")]
    TransportNotFound { name: String, identifier: String },

    #[error("Transport \"{name}\" is invalid: {reason}")]
    TransportInvalid { name: String, reason: String },

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Invalid configuration for \"{key}\": {reason}")]
    InvalidConfiguration { key: String, reason: String },

    #[error(transparent)]
    Render(#[from] RenderError),

    // Delivery errors pass through untouched
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SmsError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            SmsError::InvalidPhoneNumber { .. } => "INVALID_PHONE_NUMBER",
            SmsError::NoRecipients => "NO_RECIPIENTS",
            SmsError::TransportNotFound { .. } => "TRANSPORT_NOT_FOUND",
            SmsError::TransportInvalid { .. } => "TRANSPORT_INVALID",
            SmsError::ConfigurationMissing(_) => "CONFIGURATION_MISSING",
            SmsError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            SmsError::Render(_) => "RENDER_FAILED",
            SmsError::Transport(_) => "DELIVERY_FAILED",
        }
    }

    pub(crate) fn invalid_config(key: &str, reason: impl Into<String>) -> Self {
        SmsError::InvalidConfiguration {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SmsResult<T> = Result<T, SmsError>;
