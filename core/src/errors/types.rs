//! Errors reported by the external collaborators of the message builder

use thiserror::Error;

/// Template rendering failures
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template \"{name}\" is missing")]
    MissingTemplate { name: String },

    #[error("Layout \"{name}\" is missing")]
    MissingLayout { name: String },

    #[error("A template is set but no template renderer is configured")]
    NoRenderer,

    #[error("Rendering failed: {0}")]
    Failed(String),
}

/// Delivery failures raised by a transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Message rejected by {transport}: {reason}")]
    Rejected { transport: String, reason: String },

    #[error("Transport {transport} is unavailable")]
    Unavailable { transport: String },

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    pub fn rejected(transport: impl Into<String>, reason: impl Into<String>) -> Self {
        TransportError::Rejected {
            transport: transport.into(),
            reason: reason.into(),
        }
    }
}
