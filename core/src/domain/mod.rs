//! Domain value types shared by the message builder and the transports.

pub mod log_settings;
pub mod options;
pub mod phone;
pub mod send_result;

// Re-export commonly used domain types
pub use log_settings::{LogLevel, LogSettings, DEFAULT_LOG_SCOPE};
pub use options::{overlay, Options};
pub use phone::{NumberPattern, PhoneNumbers};
pub use send_result::SendResult;
