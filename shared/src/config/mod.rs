//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `sms` - Transport selection, sender and number-pattern settings

pub mod environment;
pub mod sms;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use sms::SmsSettings;
