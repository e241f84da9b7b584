//! Named SMS configurations loaded with the `config` crate
//!
//! A configuration file holds one table per name:
//!
//! ```toml
//! [default]
//! transportName = "Debug"
//! sender = "+491745764587"
//!
//! [marketing]
//! transportName = "Console"
//! recipients = ["+49123456789"]
//! log = { level = "notice", scope = "marketing" }
//! ```
//!
//! Every key can be overridden from the environment as
//! `SMS__<NAME>__<KEY>`, e.g. `SMS__MARKETING__SENDER=+49111`. Overrides are
//! kept as strings so numbers keep their leading `+`.

use std::path::{Path, PathBuf};

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use sms_core::{ConfigProvider, Options, SmsError, SmsResult};

use crate::InfrastructureError;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "SMS";

/// Separator between prefix, configuration name and key in overrides
pub const ENV_SEPARATOR: &str = "__";

/// [`ConfigProvider`] backed by a TOML file plus environment overrides
///
/// The `config` crate lowercases every key, so configuration names are
/// case-insensitive and options reach the builder lowercased
/// (`transportName` arrives as `transportname`, `apiKey` as `apikey`). The
/// builder matches its own keys ignoring case; transports reading camelCase
/// options from a file must look them up in lowercase.
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    settings: Config,
    source: Option<PathBuf>,
}

impl FileConfigProvider {
    /// Load named configurations from a file
    ///
    /// The format follows the file extension (`.toml`, `.json`, `.yaml`, ...).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InfrastructureError::Config(format!(
                "SMS configuration file not found: {}",
                path.display()
            )));
        }

        let builder = Config::builder().add_source(File::from(path).required(true));
        let provider = Self::build(builder, Some(path.to_path_buf()))?;

        tracing::debug!(target: "sms", path = %path.display(), "Loaded SMS configuration file");
        Ok(provider)
    }

    /// Load named configurations from TOML text
    pub fn from_toml(toml: &str) -> Result<Self, InfrastructureError> {
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder, None)
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        source: Option<PathBuf>,
    ) -> Result<Self, InfrastructureError> {
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
            .build()?;

        Ok(Self { settings, source })
    }

    /// File the configurations were read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.settings.get::<Options>(&name.to_lowercase()).is_ok()
    }
}

impl ConfigProvider for FileConfigProvider {
    fn lookup(&self, name: &str) -> SmsResult<Options> {
        match self.settings.get::<Options>(&name.to_lowercase()) {
            Ok(options) => Ok(options),
            Err(ConfigError::NotFound(_)) => Err(SmsError::ConfigurationMissing(format!(
                "unknown SMS configuration \"{}\"",
                name
            ))),
            Err(e) => Err(SmsError::InvalidConfiguration {
                key: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
