//! SMS settings module

use std::env;
use std::path::PathBuf;

use crate::phone::DEFAULT_NUMBER_PATTERN;

/// Default transport when nothing is configured
pub const DEFAULT_TRANSPORT: &str = "Debug";

/// Process-level SMS settings
#[derive(Debug, Clone, PartialEq)]
pub struct SmsSettings {
    /// Path to the TOML file holding named SMS configurations
    pub config_path: Option<PathBuf>,

    /// Named configuration applied to new builders
    pub config_name: Option<String>,

    /// Transport name (`Debug`, `Console`, `Plugin.Name`, ...)
    pub transport: String,

    /// Default sender number
    pub sender: Option<String>,

    /// Phone number pattern; `None` selects the numeric fallback
    pub number_pattern: Option<String>,
}

impl Default for SmsSettings {
    fn default() -> Self {
        Self {
            config_path: None,
            config_name: None,
            transport: default_transport(),
            sender: None,
            number_pattern: default_number_pattern(),
        }
    }
}

impl SmsSettings {
    /// Load settings from environment variables
    ///
    /// `SMS_NUMBER_PATTERN=none` disables the pattern.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            config_path: env::var("SMS_CONFIG_PATH").ok().map(PathBuf::from),
            config_name: env::var("SMS_CONFIG_NAME").ok().filter(|v| !v.is_empty()),
            transport: env::var("SMS_TRANSPORT")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.transport),
            sender: env::var("SMS_SENDER").ok().filter(|v| !v.is_empty()),
            number_pattern: match env::var("SMS_NUMBER_PATTERN") {
                Ok(v) if v.eq_ignore_ascii_case("none") => None,
                Ok(v) if !v.is_empty() => Some(v),
                _ => defaults.number_pattern,
            },
        }
    }
}

fn default_transport() -> String {
    DEFAULT_TRANSPORT.to_string()
}

fn default_number_pattern() -> Option<String> {
    Some(DEFAULT_NUMBER_PATTERN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SmsSettings::default();
        assert_eq!(settings.transport, "Debug");
        assert_eq!(settings.number_pattern.as_deref(), Some(DEFAULT_NUMBER_PATTERN));
        assert!(settings.config_path.is_none());
        assert!(settings.sender.is_none());
    }
}
