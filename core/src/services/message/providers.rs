//! In-process collaborator implementations

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use super::traits::{ConfigProvider, LogSink};
use crate::domain::{LogLevel, Options};
use crate::errors::{SmsError, SmsResult};

/// Named option sets held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    configs: HashMap<String, Options>,
}

impl StaticConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the options stored under `name`
    pub fn with(mut self, name: impl Into<String>, options: Options) -> Self {
        self.insert(name, options);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, options: Options) {
        self.configs.insert(name.into(), options);
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn lookup(&self, name: &str) -> SmsResult<Options> {
        self.configs
            .get(name)
            .cloned()
            .ok_or_else(|| SmsError::ConfigurationMissing(format!("unknown SMS configuration \"{}\"", name)))
    }
}

/// Log sink writing through `tracing`
///
/// Emergency to error map to `ERROR`, warning to `WARN`, notice and info to
/// `INFO`, debug to `DEBUG`. The scope is recorded as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn write(&self, level: LogLevel, message: &str, scope: &str) {
        match level {
            LogLevel::Emergency | LogLevel::Alert | LogLevel::Critical | LogLevel::Error => {
                error!(target: "sms", scope, severity = %level, "{}", message)
            }
            LogLevel::Warning => warn!(target: "sms", scope, severity = %level, "{}", message),
            LogLevel::Notice | LogLevel::Info => {
                info!(target: "sms", scope, severity = %level, "{}", message)
            }
            LogLevel::Debug => debug!(target: "sms", scope, severity = %level, "{}", message),
        }
    }
}
