//! SMS transports provided by the infrastructure layer
//!
//! - **Console**: prints every message to stdout for local development
//! - **Memory**: records every message into a shared outbox for tests and
//!   previews
//!
//! Both are registered by [`crate::default_registry`] under the names
//! `Console` and `Memory`.

pub mod console;
pub mod memory;

pub use console::ConsoleTransport;
pub use memory::{MemoryMessage, MemoryOutbox, MemoryTransport};

#[cfg(test)]
mod tests;
