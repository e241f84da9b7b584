//! # SMS Core
//!
//! Domain layer for sending SMS messages. A [`MessageBuilder`] collects
//! recipients, a sender and the message body (verbatim or rendered through a
//! [`TemplateRenderer`]) and hands itself to a [`Transport`] resolved by name
//! from a [`TransportRegistry`].
//!
//! ```ignore
//! let mut sms = MessageBuilder::default();
//! sms.set_recipients("+49123456789")?
//!     .set_sender("+491745764587")?;
//! let result = sms.send("hello hello")?;
//! ```

pub mod domain;
pub mod errors;
pub mod services;
pub mod transport;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use transport::*;
