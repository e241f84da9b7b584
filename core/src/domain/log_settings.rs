//! Success-log settings carried in the builder's `log` option

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::options::is_truthy;
use crate::errors::{SmsError, SmsResult};

/// Scope tag used when the `log` option does not name one
pub const DEFAULT_LOG_SCOPE: &str = "email";

/// Syslog severities, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl LogLevel {
    /// Level for a numeric syslog code (0 = emergency .. 7 = debug)
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(LogLevel::Emergency),
            1 => Some(LogLevel::Alert),
            2 => Some(LogLevel::Critical),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Warning),
            5 => Some(LogLevel::Notice),
            6 => Some(LogLevel::Info),
            7 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    fn from_value(value: &Value) -> SmsResult<Self> {
        match value {
            Value::String(s) => s
                .parse()
                .map_err(|e: String| SmsError::invalid_config("log", e)),
            Value::Number(n) => n
                .as_u64()
                .and_then(Self::from_code)
                .ok_or_else(|| SmsError::invalid_config("log", format!("unknown log level code {}", n))),
            other => Err(SmsError::invalid_config(
                "log",
                format!("log level must be a name or a code, got {}", other),
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emergency" | "emerg" => Ok(LogLevel::Emergency),
            "alert" => Ok(LogLevel::Alert),
            "critical" | "crit" => Ok(LogLevel::Critical),
            "error" | "err" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Where and how loudly a successful send is logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub scope: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            scope: DEFAULT_LOG_SCOPE.to_string(),
        }
    }
}

impl LogSettings {
    /// Interpret a `log` option value.
    ///
    /// Falsy values disable logging. `true` keeps the defaults, a level name
    /// or syslog code picks the level, and `{ level, scope }` overrides either.
    pub fn from_value(value: &Value) -> SmsResult<Option<Self>> {
        if !is_truthy(value) {
            return Ok(None);
        }

        let mut settings = Self::default();
        match value {
            Value::Bool(_) => {}
            Value::Object(map) => {
                if let Some(level) = map.get("level").filter(|v| !v.is_null()) {
                    settings.level = LogLevel::from_value(level)?;
                }
                match map.get("scope") {
                    Some(Value::String(scope)) => settings.scope = scope.clone(),
                    Some(Value::Null) | None => {}
                    Some(other) => {
                        return Err(SmsError::invalid_config(
                            "log",
                            format!("log scope must be a string, got {}", other),
                        ))
                    }
                }
            }
            other => settings.level = LogLevel::from_value(other)?,
        }
        Ok(Some(settings))
    }
}
