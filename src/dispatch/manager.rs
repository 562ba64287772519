//! NotificationDispatcher implementation
//!
//! Orchestrates one dispatch end to end: resolve settings, validate, run the
//! pre hook, extract sections, format the subject, compose the message, hand
//! it to the selected delivery backend, run the post hook. Exactly one
//! delivery attempt per call and nothing propagates out; the outcome carries
//! any captured failure for the host to log.

use crate::config::resolver;
use crate::config::settings::{NotifierSettings, SettingsOverlay};
use crate::context::extractor;
use crate::context::registry::StrategyRegistry;
use crate::context::traits::SectionStrategy;
use crate::core::error_handling::log_error_with_context;
use crate::dispatch::error::DispatchError;
use crate::dispatch::message::{DeliveryReceipt, Message, TEMPLATE_BACKGROUND, TEMPLATE_FOREGROUND};
use crate::dispatch::options::{NotifyOptions, PostCallback, PreCallback};
use crate::dispatch::traits::{DeliveryBackend, LogDeliveryBackend};
use crate::event::{ErrorEvent, RequestContext};
use crate::subject::formatter;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of one dispatch. `notify` never fails; a captured error rides
/// here instead.
#[derive(Clone, Debug)]
pub struct DispatchOutcome {
    pub delivered: bool,
    pub receipt: Option<DeliveryReceipt>,
    pub error: Option<DispatchError>,
}

impl DispatchOutcome {
    pub fn delivered(receipt: DeliveryReceipt) -> Self {
        Self {
            delivered: true,
            receipt: Some(receipt),
            error: None,
        }
    }

    pub fn failed(error: DispatchError) -> Self {
        Self {
            delivered: false,
            receipt: None,
            error: Some(error),
        }
    }
}

pub struct NotificationDispatcher {
    defaults: NotifierSettings,
    instance: SettingsOverlay,
    strategies: StrategyRegistry,
    backends: HashMap<String, Arc<dyn DeliveryBackend>>,
    pre_callback: Option<PreCallback>,
    post_callback: Option<PostCallback>,
}

impl NotificationDispatcher {
    /// Dispatcher over the given defaults and instance configuration, with
    /// builtin strategies and the log backend preregistered.
    pub fn new(defaults: NotifierSettings, instance: SettingsOverlay) -> Self {
        let mut backends: HashMap<String, Arc<dyn DeliveryBackend>> = HashMap::new();
        let log_backend = Arc::new(LogDeliveryBackend::new());
        backends.insert(log_backend.backend_id().to_string(), log_backend);

        Self {
            defaults,
            instance,
            strategies: StrategyRegistry::with_builtins(),
            backends,
            pre_callback: None,
            post_callback: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(NotifierSettings::default(), SettingsOverlay::default())
    }

    /// Register a delivery backend under its own selector.
    pub fn register_backend(&mut self, backend: Arc<dyn DeliveryBackend>) {
        let selector = backend.backend_id().to_string();
        if self.backends.insert(selector.clone(), backend).is_some() {
            log::warn!("Delivery backend '{selector}' replaced an existing registration");
        }
    }

    /// Register a section extraction strategy.
    pub fn register_strategy(&mut self, name: impl Into<String>, strategy: Box<dyn SectionStrategy>) {
        self.strategies.register(name, strategy);
    }

    pub fn set_pre_callback(&mut self, callback: PreCallback) {
        self.pre_callback = Some(callback);
    }

    pub fn set_post_callback(&mut self, callback: PostCallback) {
        self.post_callback = Some(callback);
    }

    pub fn has_backend(&self, selector: &str) -> bool {
        self.backends.contains_key(selector)
    }

    /// Dispatch one notification. Background mode is marked by an absent
    /// context.
    ///
    /// Only unusable required settings abort, and they do so before any side
    /// effect. Callback failures are logged and swallowed; delivery failures
    /// are captured into the outcome.
    pub async fn notify(
        &self,
        event: &ErrorEvent,
        context: Option<&RequestContext>,
        options: &NotifyOptions,
    ) -> DispatchOutcome {
        let effective = resolver::resolve(&self.defaults, &self.instance, &options.overrides);

        if let Err(err) = effective.ensure_deliverable() {
            log_error_with_context(&err, "Notification dispatch pre-flight");
            return DispatchOutcome::failed(err.into());
        }

        self.run_pre_callback(event, context, &effective, options);

        let message = self.compose(event, context, &effective, options);
        log::debug!(
            "Composed notification '{}' for {} recipient(s) via backend '{}'",
            message.subject,
            message.recipients.len(),
            effective.backend
        );

        let outcome = match self.backends.get(&effective.backend) {
            None => {
                let err = DispatchError::BackendNotFound {
                    selector: effective.backend.clone(),
                };
                log::error!("{err}");
                DispatchOutcome::failed(err)
            }
            Some(backend) => match backend.deliver(&message).await {
                Ok(receipt) => {
                    log::trace!("Notification delivered via '{}'", receipt.backend_id);
                    DispatchOutcome::delivered(receipt)
                }
                Err(err) => {
                    log_error_with_context(&err, "Notification delivery");
                    DispatchOutcome::failed(err.into())
                }
            },
        };

        self.run_post_callback(event, context, &effective, options, outcome.receipt.as_ref());

        outcome
    }

    fn compose(
        &self,
        event: &ErrorEvent,
        context: Option<&RequestContext>,
        effective: &NotifierSettings,
        options: &NotifyOptions,
    ) -> Message {
        let is_background = context.is_none();
        let body = extractor::extract(
            &self.strategies,
            event,
            context,
            effective,
            &options.data,
            is_background,
        );
        let action_name = context.and_then(|ctx| ctx.action.as_deref());
        let subject = formatter::format_subject(event, action_name, effective);
        let template_name = if is_background {
            TEMPLATE_BACKGROUND
        } else {
            TEMPLATE_FOREGROUND
        };

        Message {
            sender: effective.sender.clone(),
            recipients: effective.recipients.clone(),
            subject,
            body,
            format: effective.format,
            headers: effective.headers.clone(),
            template_name: template_name.to_string(),
        }
    }

    fn run_pre_callback(
        &self,
        event: &ErrorEvent,
        context: Option<&RequestContext>,
        effective: &NotifierSettings,
        options: &NotifyOptions,
    ) {
        let callback = options.pre_callback.as_ref().or(self.pre_callback.as_ref());
        if let Some(callback) = callback {
            if let Err(err) = callback(event, context, effective) {
                log::warn!("Pre-notification callback failed, continuing dispatch: {err}");
            }
        }
    }

    fn run_post_callback(
        &self,
        event: &ErrorEvent,
        context: Option<&RequestContext>,
        effective: &NotifierSettings,
        options: &NotifyOptions,
        receipt: Option<&DeliveryReceipt>,
    ) {
        let callback = options
            .post_callback
            .as_ref()
            .or(self.post_callback.as_ref());
        if let Some(callback) = callback {
            if let Err(err) = callback(event, context, effective, receipt) {
                log::warn!("Post-notification callback failed: {err}");
            }
        }
    }
}
