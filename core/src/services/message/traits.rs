//! Collaborator traits for the message builder

use crate::domain::{LogLevel, Options};
use crate::errors::{RenderError, SmsResult};

use super::types::RenderRequest;

/// Source of named option sets (`configure_named("default")`)
pub trait ConfigProvider: Send + Sync {
    /// Options stored under `name`
    ///
    /// Returns `SmsError::ConfigurationMissing` when the name is unknown.
    fn lookup(&self, name: &str) -> SmsResult<Options>;
}

/// Turns a template plus variables into the final message text
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, RenderError>;
}

/// Receives the log entry written after a successful send
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, message: &str, scope: &str);
}
