//! Console transport
//!
//! Prints SMS messages to the console instead of sending them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use sms_core::{MessageBuilder, Options, SendResult, Transport, TransportError};
use sms_shared::phone::mask_phone_numbers;
use tracing::info;
use uuid::Uuid;

/// Default width of the frame drawn around each message
pub const DEFAULT_FRAME_WIDTH: usize = 60;

/// Transport writing each message to stdout
///
/// Options:
/// - `quiet` (bool): skip the console output, keep the log line
/// - `width` (integer): frame width, defaults to [`DEFAULT_FRAME_WIDTH`]
#[derive(Debug, Default)]
pub struct ConsoleTransport {
    options: Options,
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    fn quiet(&self) -> bool {
        matches!(self.options.get("quiet"), Some(Value::Bool(true)))
    }

    fn frame_width(&self) -> usize {
        self.options
            .get("width")
            .and_then(Value::as_u64)
            .and_then(|w| usize::try_from(w).ok())
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_FRAME_WIDTH)
    }
}

impl Transport for ConsoleTransport {
    fn name(&self) -> &str {
        "Console"
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn send(&self, message: &MessageBuilder) -> Result<SendResult, TransportError> {
        let message_id = format!("console_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let recipients = message.recipients().join(", ");

        if !self.quiet() {
            let rule = "=".repeat(self.frame_width());
            println!("\n{}", rule);
            println!("SMS CONSOLE TRANSPORT - MESSAGE #{}", count);
            println!("{}", rule);
            if !message.sender().is_empty() {
                println!("From: {}", message.sender());
            }
            println!("To: {}", recipients);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message.message_body());
            println!("{}\n", rule);
        }

        info!(
            target: "sms",
            provider = "console",
            recipients = %mask_phone_numbers(message.recipients()),
            message_id = %message_id,
            message_length = message.message_body().len(),
            "SMS written to console"
        );

        let mut result = SendResult::new(message.message_body());
        if !message.sender().is_empty() {
            result = result.with_header("From", message.sender());
        }
        Ok(result
            .with_header("To", recipients)
            .with_header("Date", Utc::now().to_rfc2822())
            .with_header("Message-ID", message_id.clone())
            .with_message_id(message_id))
    }
}
