//! In-memory transport recording every message into a shared outbox

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sms_core::domain::options::is_truthy;
use sms_core::{MessageBuilder, Options, SendResult, Transport, TransportError};
use sms_shared::phone::mask_phone_numbers;
use tracing::{debug, warn};
use uuid::Uuid;

/// A message captured by [`MemoryTransport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryMessage {
    pub id: String,
    pub sender: String,
    pub recipients: Vec<String>,
    pub message: String,
    /// Transport options in effect when the message was sent
    pub options: Options,
    pub sent_at: DateTime<Utc>,
}

/// Shared, cloneable list of captured messages
#[derive(Debug, Clone, Default)]
pub struct MemoryOutbox {
    messages: Arc<Mutex<Vec<MemoryMessage>>>,
}

impl MemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every captured message, oldest first
    pub fn messages(&self) -> Vec<MemoryMessage> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<MemoryMessage> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Messages addressed to `number`
    pub fn sent_to(&self, number: &str) -> Vec<MemoryMessage> {
        self.lock()
            .iter()
            .filter(|m| m.recipients.iter().any(|r| r == number))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, message: MemoryMessage) {
        self.lock().push(message);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MemoryMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Transport that stores messages instead of delivering them
///
/// Options:
/// - `fail`: when truthy, every send is rejected; a string value is used as
///   the rejection reason
#[derive(Debug, Default)]
pub struct MemoryTransport {
    options: Options,
    outbox: MemoryOutbox,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport recording into an outbox the caller keeps a handle to
    pub fn with_outbox(outbox: MemoryOutbox) -> Self {
        Self {
            options: Options::new(),
            outbox,
        }
    }

    pub fn outbox(&self) -> &MemoryOutbox {
        &self.outbox
    }

    fn failure_reason(&self) -> Option<String> {
        match self.options.get("fail") {
            Some(Value::String(reason)) if !reason.is_empty() && reason != "0" => Some(reason.clone()),
            Some(value) if is_truthy(value) => Some(String::from("delivery disabled by the fail option")),
            _ => None,
        }
    }
}

impl Transport for MemoryTransport {
    fn name(&self) -> &str {
        "Memory"
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn send(&self, message: &MessageBuilder) -> Result<SendResult, TransportError> {
        if let Some(reason) = self.failure_reason() {
            warn!(
                target: "sms",
                provider = "memory",
                recipients = %mask_phone_numbers(message.recipients()),
                "Memory transport simulating failure"
            );
            return Err(TransportError::rejected(self.name(), reason));
        }

        let captured = MemoryMessage {
            id: format!("memory_{}", Uuid::new_v4()),
            sender: message.sender().to_string(),
            recipients: message.recipients().to_vec(),
            message: message.message_body().to_string(),
            options: self.options.clone(),
            sent_at: Utc::now(),
        };

        debug!(
            target: "sms",
            provider = "memory",
            message_id = %captured.id,
            recipients = %mask_phone_numbers(&captured.recipients),
            "SMS captured in memory outbox"
        );

        let result = SendResult::new(captured.message.clone())
            .with_header("To", captured.recipients.join(", "))
            .with_header("Message-ID", captured.id.clone())
            .with_message_id(captured.id.clone());
        self.outbox.push(captured);
        Ok(result)
    }
}
