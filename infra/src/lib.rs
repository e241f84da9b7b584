//! # Infrastructure Layer
//!
//! Concrete collaborators for the SMS message builder in `sms_core`:
//!
//! - **Transports**: console output and an in-memory outbox, next to the
//!   built-in debug transport
//! - **Configuration**: named SMS configurations read from TOML files with
//!   environment overrides
//! - **Logging**: `tracing-subscriber` setup driven by [`LoggingConfig`]

use std::sync::Arc;

use sms_core::{MessageBuilder, SmsError, TransportRegistry};
use sms_shared::config::{LoggingConfig, SmsSettings};

pub mod config;
pub mod logging;
pub mod transports;

pub use config::FileConfigProvider;
pub use transports::{ConsoleTransport, MemoryMessage, MemoryOutbox, MemoryTransport};

/// Registry holding the `Debug`, `Console` and `Memory` transports
///
/// The `Memory` transport records into a fresh outbox nobody else holds; use
/// [`registry_with_outbox`] to read what was sent.
pub fn default_registry() -> TransportRegistry {
    registry_with_outbox(MemoryOutbox::new())
}

/// Same as [`default_registry`], with every `Memory` transport recording into `outbox`
pub fn registry_with_outbox(outbox: MemoryOutbox) -> TransportRegistry {
    let mut registry = TransportRegistry::with_builtin();
    registry.register_default::<ConsoleTransport>("Console");
    registry.register("Memory", move || {
        Ok(Box::new(MemoryTransport::with_outbox(outbox.clone())) as Box<dyn sms_core::Transport>)
    });
    registry
}

/// Load `.env` (if present) and read [`SmsSettings`] from the environment
pub fn load_settings() -> SmsSettings {
    dotenvy::dotenv().ok();
    SmsSettings::from_env()
}

/// Install the global tracing subscriber from `LOG_LEVEL`/`LOG_FORMAT`
pub fn init_logging_from_env() -> Result<(), InfrastructureError> {
    dotenvy::dotenv().ok();
    logging::init_tracing(&LoggingConfig::from_env())
}

/// Build a message builder wired from the process environment
///
/// See [`builder_from_settings`].
pub fn builder_from_env() -> Result<MessageBuilder, InfrastructureError> {
    builder_from_settings(&load_settings(), Arc::new(default_registry()))
}

/// Build a message builder from explicit settings
///
/// Applies, in order: the number pattern, the transport name, the sender and,
/// when both a config file and a config name are set, the named configuration.
pub fn builder_from_settings(
    settings: &SmsSettings,
    registry: Arc<TransportRegistry>,
) -> Result<MessageBuilder, InfrastructureError> {
    let mut builder = MessageBuilder::new(registry);

    if let Some(path) = &settings.config_path {
        let provider = FileConfigProvider::from_path(path)?;
        builder = builder.with_config_provider(Arc::new(provider));
    }

    builder.set_number_pattern(settings.number_pattern.as_deref())?;
    builder.set_transport_name(settings.transport.as_str());
    if let Some(sender) = &settings.sender {
        builder.set_sender(sender)?;
    }

    match (&settings.config_path, &settings.config_name) {
        (Some(_), Some(name)) => {
            builder.configure_named(name)?;
        }
        (None, Some(name)) => {
            return Err(InfrastructureError::Config(format!(
                "SMS configuration \"{}\" requested but SMS_CONFIG_PATH is not set",
                name
            )));
        }
        _ => {}
    }

    tracing::info!(
        target: "sms",
        transport = builder.transport_name(),
        config = settings.config_name.as_deref().unwrap_or("-"),
        "SMS message builder initialized"
    );

    Ok(builder)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration source could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(#[from] ::config::ConfigError),

    /// SMS builder error
    #[error("SMS error: {0}")]
    Sms(#[from] SmsError),
}

#[cfg(test)]
mod tests;
