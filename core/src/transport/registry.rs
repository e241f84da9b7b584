//! Registry mapping transport identifiers to factories

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{DebugTransport, Transport};
use crate::errors::{SmsError, SmsResult};

/// Suffix appended to a transport's base name to form its identifier
pub const TRANSPORT_SUFFIX: &str = "Transport";

/// Builds a fresh transport instance, or explains why it cannot
pub type TransportFactory =
    Arc<dyn Fn() -> Result<Box<dyn Transport>, String> + Send + Sync>;

/// Split `Qualifier.Name` into its optional qualifier and base name
///
/// Only the first dot separates; a name without a dot has no qualifier.
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.split_once('.') {
        Some((qualifier, base)) => (Some(qualifier), base),
        None => (None, name),
    }
}

/// Identifier a transport name resolves to (`Debug` -> `DebugTransport`)
pub fn transport_identifier(name: &str) -> String {
    match split_qualified(name) {
        (Some(qualifier), base) => format!("{}.{}{}", qualifier, base, TRANSPORT_SUFFIX),
        (None, base) => format!("{}{}", base, TRANSPORT_SUFFIX),
    }
}

/// Explicit table of the transports a process can use
#[derive(Clone, Default)]
pub struct TransportRegistry {
    factories: HashMap<String, TransportFactory>,
}

impl TransportRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `Debug` transport
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_default::<DebugTransport>("Debug");
        registry
    }

    /// Register a factory under the identifier derived from `name`
    ///
    /// Registering the same name again replaces the previous factory.
    pub fn register<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Box<dyn Transport>, String> + Send + Sync + 'static,
    {
        let identifier = transport_identifier(name);
        tracing::debug!(target: "sms", %identifier, "Registered SMS transport");
        self.factories.insert(identifier, Arc::new(factory));
        self
    }

    /// Register a transport type built through its `Default` impl
    pub fn register_default<T>(&mut self, name: &str) -> &mut Self
    where
        T: Transport + Default + 'static,
    {
        self.register(name, || Ok(Box::new(T::default()) as Box<dyn Transport>))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&transport_identifier(name))
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Build a new instance of the transport registered for `name`
    ///
    /// # Errors
    ///
    /// * `TransportNotFound` - no factory for the derived identifier
    /// * `TransportInvalid` - the factory could not produce a transport
    pub fn resolve(&self, name: &str) -> SmsResult<Box<dyn Transport>> {
        let identifier = transport_identifier(name);
        let (_, base) = split_qualified(name);
        let factory = self
            .factories
            .get(&identifier)
            .filter(|_| !base.is_empty())
            .ok_or_else(|| SmsError::TransportNotFound {
                name: name.to_string(),
                identifier: identifier.clone(),
            })?;

        factory().map_err(|reason| SmsError::TransportInvalid {
            name: name.to_string(),
            reason,
        })
    }
}

impl fmt::Debug for TransportRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}
