//! Message body rendering

use serde_json::Value;
use tracing::debug;

use super::builder::MessageBuilder;
use super::types::{RenderRequest, VIEW_PATH};
use crate::errors::{RenderError, SmsResult};
use crate::transport::split_qualified;

const CONTENT_VAR: &str = "content";

impl MessageBuilder {
    /// Body for `content`: verbatim without a template, rendered otherwise
    pub(super) fn render_body(&self, content: &str) -> SmsResult<String> {
        let Some(template) = self.template_name() else {
            return Ok(content.to_string());
        };
        let renderer = self.renderer().ok_or(RenderError::NoRenderer)?;

        let (template_plugin, template) = split_qualified(template);
        let (layout_plugin, layout) = match self.layout_name().filter(|l| !l.is_empty()) {
            Some(layout) => {
                let (plugin, name) = split_qualified(layout);
                (plugin, Some(name))
            }
            None => (None, None),
        };

        let mut vars = self.view_vars().clone();
        if vars.get(CONTENT_VAR).map_or(true, Value::is_null) {
            vars.insert(CONTENT_VAR.to_string(), Value::String(content.to_string()));
        }

        let request = RenderRequest {
            template,
            layout,
            plugin: template_plugin.or(layout_plugin),
            content,
            vars: &vars,
            helpers: self.helpers(),
            theme: self.theme(),
            view_path: VIEW_PATH,
        };
        debug!(target: "sms", template, layout = ?layout, "Rendering SMS template");

        Ok(renderer.render(&request)?)
    }
}
