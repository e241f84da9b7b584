//! Message builder module
//!
//! This module provides the SMS message workflow:
//! - Recipient and sender management with phone number validation
//! - Option merging and named configurations
//! - Optional template rendering through an injected renderer
//! - Transport resolution and dispatch
//! - Optional logging of successful sends

mod builder;
mod providers;
mod render;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use builder::MessageBuilder;
pub use providers::{StaticConfigProvider, TracingLogSink};
pub use traits::{ConfigProvider, LogSink, TemplateRenderer};
pub use types::{
    LayoutChoice, RenderRequest, SendStage, DEFAULT_LAYOUT, KEY_LOG, KEY_RECIPIENTS, KEY_SENDER,
    KEY_TRANSPORT, KEY_TRANSPORT_ALIAS, VIEW_PATH,
};
