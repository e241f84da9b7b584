//! Business services: the message builder and its collaborators.

pub mod message;

// Re-export commonly used types
pub use message::{
    ConfigProvider, LayoutChoice, LogSink, MessageBuilder, RenderRequest, SendStage,
    StaticConfigProvider, TemplateRenderer, TracingLogSink,
};
