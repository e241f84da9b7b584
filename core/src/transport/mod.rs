//! Transport contract and name-based transport resolution
//!
//! A transport delivers a prepared [`MessageBuilder`] to a gateway. Transports
//! are looked up by name in a [`TransportRegistry`]: the name `Debug` resolves
//! to the factory registered under `DebugTransport`, and a qualified name such
//! as `Acme.Gateway` resolves to `Acme.GatewayTransport`.

pub mod debug;
pub mod registry;

#[cfg(test)]
mod tests;

pub use debug::DebugTransport;
pub use registry::{split_qualified, transport_identifier, TransportFactory, TransportRegistry};

use crate::domain::{overlay, Options, SendResult};
use crate::errors::TransportError;
use crate::services::MessageBuilder;

/// Delivery strategy used by [`MessageBuilder::send`]
///
/// Implementations include:
/// - [`DebugTransport`], which delivers nothing and echoes the message
/// - console and in-memory transports in the infrastructure crate
pub trait Transport: Send + Sync {
    /// Short provider name used in logs (e.g. "Debug")
    fn name(&self) -> &str;

    /// Current option store
    fn options(&self) -> &Options;

    fn options_mut(&mut self) -> &mut Options;

    /// Merge `options` into the option store; new values win.
    ///
    /// Returns the full option store after the merge.
    fn configure(&mut self, options: Options) -> &Options {
        let merged = overlay(self.options(), &options);
        *self.options_mut() = merged;
        self.options()
    }

    /// Deliver the builder's message to its recipients
    ///
    /// # Returns
    ///
    /// * `Ok(SendResult)` - delivered body plus headers/metadata
    /// * `Err(TransportError)` - delivery failed; the builder passes it on untouched
    fn send(&self, message: &MessageBuilder) -> Result<SendResult, TransportError>;
}
