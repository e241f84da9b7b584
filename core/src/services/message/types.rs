//! Types and constants used by the message builder

use crate::domain::Options;

/// Option key routed to `set_sender`
pub const KEY_SENDER: &str = "sender";
/// Option key routed to `set_recipients`
pub const KEY_RECIPIENTS: &str = "recipients";
/// Option key routed to `set_transport_name`
pub const KEY_TRANSPORT: &str = "transportName";
/// Shorter spelling of [`KEY_TRANSPORT`]; `transportName` wins when both are set
pub const KEY_TRANSPORT_ALIAS: &str = "transport";
/// Option key enabling the success log
pub const KEY_LOG: &str = "log";

/// Layout used until one is chosen
pub const DEFAULT_LAYOUT: &str = "default";
/// View path passed to the renderer for both templates and layouts
pub const VIEW_PATH: &str = "Sms";

/// Layout argument of `MessageBuilder::set_template`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutChoice {
    /// Keep the current layout
    Keep,
    /// Render without a layout
    None,
    /// Use the named layout
    Named(String),
}

impl From<&str> for LayoutChoice {
    fn from(name: &str) -> Self {
        LayoutChoice::Named(name.to_string())
    }
}

impl From<Option<&str>> for LayoutChoice {
    fn from(name: Option<&str>) -> Self {
        match name {
            Some(name) => LayoutChoice::Named(name.to_string()),
            None => LayoutChoice::None,
        }
    }
}

/// Progress of the last `send` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendStage {
    #[default]
    Idle,
    Validating,
    Rendering,
    Dispatching,
    Done,
    Failed,
}

/// Everything a template renderer needs for one message
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    /// Template name without its qualifier
    pub template: &'a str,
    /// Layout name without its qualifier; `None` renders without a layout
    pub layout: Option<&'a str>,
    /// Qualifier of the template, else of the layout
    pub plugin: Option<&'a str>,
    /// Content passed to `send`
    pub content: &'a str,
    /// View variables; `content` holds the send content unless the caller set it
    pub vars: &'a Options,
    pub helpers: &'a [String],
    pub theme: Option<&'a str>,
    /// Directory the renderer looks templates and layouts up in
    pub view_path: &'a str,
}
