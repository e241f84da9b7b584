//! Transport that delivers nothing and reports what it would have sent

use chrono::Utc;
use sms_shared::phone::mask_phone_numbers;
use tracing::debug;
use uuid::Uuid;

use super::Transport;
use crate::domain::{Options, SendResult};
use crate::errors::TransportError;
use crate::services::MessageBuilder;

/// No-op transport for development and tests
///
/// The result carries `From` (when a sender is set), `To`, `Date` and
/// `Message-ID` headers plus the message body.
#[derive(Debug, Default)]
pub struct DebugTransport {
    options: Options,
}

impl DebugTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for DebugTransport {
    fn name(&self) -> &str {
        "Debug"
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn send(&self, message: &MessageBuilder) -> Result<SendResult, TransportError> {
        let message_id = format!("debug_{}", Uuid::new_v4());
        let mut result = SendResult::new(message.message_body());

        if !message.sender().is_empty() {
            result = result.with_header("From", message.sender());
        }
        result = result
            .with_header("To", message.recipients().join(", "))
            .with_header("Date", Utc::now().to_rfc2822())
            .with_header("Message-ID", message_id.clone())
            .with_message_id(message_id);

        debug!(
            target: "sms",
            provider = "debug",
            recipients = %mask_phone_numbers(message.recipients()),
            message_length = message.message_body().len(),
            "SMS not delivered (debug transport)"
        );

        Ok(result)
    }
}
