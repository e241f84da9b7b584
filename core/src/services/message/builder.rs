//! The SMS message builder

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use sms_shared::config::sms::DEFAULT_TRANSPORT;
use sms_shared::phone::{mask_phone_number, mask_phone_numbers};
use tracing::{debug, info};

use super::providers::TracingLogSink;
use super::traits::{ConfigProvider, LogSink, TemplateRenderer};
use super::types::{
    LayoutChoice, SendStage, DEFAULT_LAYOUT, KEY_LOG, KEY_RECIPIENTS, KEY_SENDER, KEY_TRANSPORT,
    KEY_TRANSPORT_ALIAS,
};
use crate::domain::options::scalar_to_string;
use crate::domain::{overlay, LogSettings, NumberPattern, Options, PhoneNumbers, SendResult};
use crate::errors::{SmsError, SmsResult};
use crate::transport::{Transport, TransportRegistry};

/// Collects recipients, sender and content of one SMS and sends it through
/// a transport resolved by name.
///
/// Every number is validated against the active [`NumberPattern`] when it is
/// assigned. A builder owns its transport instance; renaming the transport
/// drops the instance so the next resolution builds a new one.
pub struct MessageBuilder {
    registry: Arc<TransportRegistry>,
    config_provider: Option<Arc<dyn ConfigProvider>>,
    renderer: Option<Arc<dyn TemplateRenderer>>,
    log_sink: Arc<dyn LogSink>,

    recipients: Vec<String>,
    sender: String,
    message: String,
    config: Options,
    number_pattern: NumberPattern,

    transport_name: String,
    transport: Option<Box<dyn Transport>>,

    template: Option<String>,
    layout: Option<String>,
    view_vars: Options,
    helpers: Vec<String>,
    theme: Option<String>,

    stage: SendStage,
}

impl MessageBuilder {
    /// Create a builder resolving transports from `registry`
    pub fn new(registry: Arc<TransportRegistry>) -> Self {
        Self {
            registry,
            config_provider: None,
            renderer: None,
            log_sink: Arc::new(TracingLogSink),
            recipients: Vec::new(),
            sender: String::new(),
            message: String::new(),
            config: Options::new(),
            number_pattern: NumberPattern::default(),
            transport_name: DEFAULT_TRANSPORT.to_string(),
            transport: None,
            template: None,
            layout: Some(DEFAULT_LAYOUT.to_string()),
            view_vars: Options::new(),
            helpers: Vec::new(),
            theme: None,
            stage: SendStage::Idle,
        }
    }

    /// Use `provider` for `configure_named`
    pub fn with_config_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.config_provider = Some(provider);
        self
    }

    /// Use `renderer` when a template is set
    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Write success logs to `sink` instead of `tracing`
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = sink;
        self
    }

    /// Apply `options` right away, as `configure` would
    pub fn with_config(mut self, options: Options) -> SmsResult<Self> {
        self.configure(options)?;
        Ok(self)
    }

    // ---- configuration ----

    /// Current merged configuration
    pub fn config(&self) -> &Options {
        &self.config
    }

    /// Merge `options` into the configuration.
    ///
    /// New values override existing keys. `sender`, `recipients` and
    /// `transportName` (or `transport`) are matched ignoring case, routed to
    /// the builder and not forwarded; every other key is merged into the
    /// active transport's options. Numbers are validated and a renamed
    /// transport is built before anything is changed, so a failing mapping
    /// leaves the builder as it was. Empty options change nothing.
    pub fn configure(&mut self, options: Options) -> SmsResult<&Options> {
        if options.is_empty() {
            return Ok(&self.config);
        }

        let mut forwarded = options.clone();
        let sender = take_scalar(&mut forwarded, &[KEY_SENDER])?.filter(|s| !s.is_empty());
        let recipients = take_numbers(&mut forwarded, &[KEY_RECIPIENTS])?;
        let transport_name = take_scalar(&mut forwarded, &[KEY_TRANSPORT, KEY_TRANSPORT_ALIAS])?;

        if let Some(sender) = &sender {
            self.number_pattern.validate(sender)?;
        }
        if let Some(recipients) = &recipients {
            self.number_pattern.validate_all(recipients.as_slice())?;
        }

        let mut transport = match &transport_name {
            Some(name) => {
                let transport = self.registry.resolve(name)?;
                debug!(target: "sms", transport = %name, provider = transport.name(), "Resolved SMS transport");
                transport
            }
            None => self.take_transport()?,
        };
        transport.configure(forwarded);

        self.config = overlay(&self.config, &options);
        if let Some(sender) = sender {
            self.sender = sender;
        }
        if let Some(recipients) = recipients {
            self.recipients = recipients;
        }
        if let Some(name) = transport_name {
            self.transport_name = name;
        }
        self.transport = Some(transport);
        Ok(&self.config)
    }

    /// Load the named option set from the configuration provider and apply it
    pub fn configure_named(&mut self, name: &str) -> SmsResult<&Options> {
        let provider = self.config_provider.as_ref().ok_or_else(|| {
            SmsError::ConfigurationMissing(format!(
                "no configuration provider available to load \"{}\"",
                name
            ))
        })?;
        let options = provider.lookup(name)?;
        debug!(target: "sms", config = name, keys = options.len(), "Loaded named SMS configuration");
        self.configure(options)
    }

    // ---- numbers ----

    /// Validation pattern source, `None` when the numeric fallback is active
    pub fn number_pattern(&self) -> Option<&str> {
        self.number_pattern.as_str()
    }

    /// Set the validation pattern; `None` switches to the numeric fallback.
    ///
    /// Numbers already assigned are not re-validated.
    pub fn set_number_pattern(&mut self, pattern: Option<&str>) -> SmsResult<&mut Self> {
        self.number_pattern = NumberPattern::from_option(pattern)?;
        Ok(self)
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Replace the recipient list. Nothing changes if any number is invalid.
    pub fn set_recipients(&mut self, numbers: impl Into<PhoneNumbers>) -> SmsResult<&mut Self> {
        let numbers = numbers.into();
        self.number_pattern.validate_all(numbers.as_slice())?;
        self.recipients = numbers.into_vec();
        Ok(self)
    }

    /// Append to the recipient list. Nothing changes if any number is invalid.
    pub fn add_recipients(&mut self, numbers: impl Into<PhoneNumbers>) -> SmsResult<&mut Self> {
        let numbers = numbers.into();
        self.number_pattern.validate_all(numbers.as_slice())?;
        self.recipients.extend(numbers.into_vec());
        Ok(self)
    }

    /// Sender number, empty when unset
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Set the sender. An empty number keeps the current sender.
    pub fn set_sender(&mut self, number: &str) -> SmsResult<&mut Self> {
        if number.is_empty() {
            return Ok(self);
        }
        self.number_pattern.validate(number)?;
        self.sender = number.to_string();
        Ok(self)
    }

    /// Body produced by the last `send`
    pub fn message_body(&self) -> &str {
        &self.message
    }

    // ---- transport ----

    pub fn transport_name(&self) -> &str {
        &self.transport_name
    }

    /// Select a transport by name and drop the cached instance
    pub fn set_transport_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.transport_name = name.into();
        self.transport = None;
        self
    }

    /// The transport instance, built from the registry on first use
    pub fn resolve_transport(&mut self) -> SmsResult<&mut dyn Transport> {
        let transport = self.take_transport()?;
        Ok(self.transport.insert(transport).as_mut())
    }

    /// Move the cached instance out, building one when the cache is empty
    fn take_transport(&mut self) -> SmsResult<Box<dyn Transport>> {
        if let Some(transport) = self.transport.take() {
            return Ok(transport);
        }
        let transport = self.registry.resolve(&self.transport_name)?;
        debug!(
            target: "sms",
            transport = %self.transport_name,
            provider = transport.name(),
            "Resolved SMS transport"
        );
        Ok(transport)
    }

    // ---- rendering ----

    pub fn template_name(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn layout_name(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    /// Set the template (`None` sends content verbatim) and optionally the layout
    pub fn set_template(&mut self, template: Option<&str>, layout: impl Into<LayoutChoice>) -> &mut Self {
        self.template = template.filter(|t| !t.is_empty()).map(str::to_string);
        match layout.into() {
            LayoutChoice::Keep => {}
            LayoutChoice::None => self.layout = None,
            LayoutChoice::Named(name) => self.layout = Some(name),
        }
        self
    }

    pub fn view_vars(&self) -> &Options {
        &self.view_vars
    }

    /// Merge variables into the view variables; new values win
    pub fn set_view_vars(&mut self, vars: Options) -> &mut Self {
        self.view_vars = overlay(&self.view_vars, &vars);
        self
    }

    pub fn helpers(&self) -> &[String] {
        &self.helpers
    }

    /// Replace the helper list
    pub fn set_helpers<I, S>(&mut self, helpers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.helpers = helpers.into_iter().map(Into::into).collect();
        self
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn set_theme(&mut self, theme: Option<&str>) -> &mut Self {
        self.theme = theme.map(str::to_string);
        self
    }

    pub(super) fn renderer(&self) -> Option<&dyn TemplateRenderer> {
        self.renderer.as_deref()
    }

    // ---- sending ----

    /// Stage reached by the last `send` call
    pub fn stage(&self) -> SendStage {
        self.stage
    }

    /// Render `content` and hand the message to the transport.
    ///
    /// Fails with `NoRecipients` before rendering when no recipient is set.
    /// Errors from the renderer or the transport are returned unchanged and
    /// nothing is retried. When the `log` option is set, the result is
    /// written to the log sink after a successful send.
    pub fn send(&mut self, content: &str) -> SmsResult<SendResult> {
        match self.dispatch(content) {
            Ok(result) => {
                self.stage = SendStage::Done;
                Ok(result)
            }
            Err(e) => {
                self.stage = SendStage::Failed;
                Err(e)
            }
        }
    }

    fn dispatch(&mut self, content: &str) -> SmsResult<SendResult> {
        self.stage = SendStage::Validating;
        if self.recipients.is_empty() {
            return Err(SmsError::NoRecipients);
        }
        let log_settings = match self.config.get(KEY_LOG) {
            Some(value) => LogSettings::from_value(value)?,
            None => None,
        };

        self.stage = SendStage::Rendering;
        self.message.clear();
        self.message = self.render_body(content)?;

        self.stage = SendStage::Dispatching;
        let transport = self.take_transport()?;
        let outcome = transport.send(self);
        self.transport = Some(transport);
        let result = outcome?;

        info!(
            target: "sms",
            transport = %self.transport_name,
            sender = %mask_phone_number(&self.sender),
            recipients = %mask_phone_numbers(&self.recipients),
            message_length = result.message.len(),
            "SMS sent"
        );

        if let Some(settings) = log_settings {
            let entry = format!("\n{}\n{}", result.headers_text(), result.message);
            self.log_sink.write(settings.level, &entry, &settings.scope);
        }

        Ok(result)
    }

    /// Clear recipients, sender, message body and configuration.
    ///
    /// The transport name and instance, the number pattern and the template
    /// settings are kept for the next message.
    pub fn reset(&mut self) -> &mut Self {
        self.recipients.clear();
        self.sender.clear();
        self.message.clear();
        self.config = Options::new();
        self.stage = SendStage::Idle;
        self
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new(Arc::new(TransportRegistry::with_builtin()))
    }
}

impl fmt::Debug for MessageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuilder")
            .field("recipients", &self.recipients)
            .field("sender", &self.sender)
            .field("message", &self.message)
            .field("config", &self.config)
            .field("number_pattern", &self.number_pattern.as_str())
            .field("transport_name", &self.transport_name)
            .field("transport_resolved", &self.transport.is_some())
            .field("template", &self.template)
            .field("layout", &self.layout)
            .field("stage", &self.stage)
            .finish()
    }
}

/// Remove every key matching one of `names` (ignoring ASCII case) and return
/// the value of the earliest name in `names`
fn take_value(options: &mut Options, names: &[&str]) -> Option<Value> {
    let rank = |key: &str| names.iter().position(|name| key.eq_ignore_ascii_case(name));
    let keys: Vec<String> = options.keys().filter(|k| rank(k.as_str()).is_some()).cloned().collect();

    let mut found: Vec<(usize, Value)> = keys
        .into_iter()
        .filter_map(|key| {
            let position = rank(key.as_str())?;
            options.remove(&key).map(|value| (position, value))
        })
        .collect();
    found.sort_by_key(|(position, _)| *position);
    found.into_iter().map(|(_, value)| value).next()
}

/// Remove `names` and read the value as text; `null` counts as absent
fn take_scalar(options: &mut Options, names: &[&str]) -> SmsResult<Option<String>> {
    let key = names[0];
    match take_value(options, names) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_string(&value)
            .map(Some)
            .ok_or_else(|| SmsError::invalid_config(key, format!("expected a string, got {}", value))),
    }
}

/// Remove `names` and read the value as one number or a list of numbers
fn take_numbers(options: &mut Options, names: &[&str]) -> SmsResult<Option<Vec<String>>> {
    let key = names[0];
    match take_value(options, names) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                scalar_to_string(item).ok_or_else(|| {
                    SmsError::invalid_config(key, format!("expected phone numbers, got {}", item))
                })
            })
            .collect::<SmsResult<Vec<_>>>()
            .map(Some),
        Some(value) => scalar_to_string(&value)
            .map(|number| Some(vec![number]))
            .ok_or_else(|| SmsError::invalid_config(key, format!("expected phone numbers, got {}", value))),
    }
}
