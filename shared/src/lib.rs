//! Shared utilities and common types for the SMS workspace
//!
//! This crate provides functionality used by both the domain and the
//! infrastructure crates:
//! - Configuration types (environment, logging, SMS settings)
//! - Phone number utilities (masking, numeric check)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, SmsSettings};
pub use utils::phone;
