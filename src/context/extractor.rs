//! Section extraction
//!
//! Walks the configured section list for the dispatch mode (request-bound or
//! background) and collects each section's payload into a bundle. Every
//! per-section failure is isolated: a missing strategy or a strategy error
//! drops that one section with a warning and the rest still extract.

use crate::config::settings::NotifierSettings;
use crate::context::bundle::SectionBundle;
use crate::context::registry::StrategyRegistry;
use crate::event::{ErrorEvent, RequestContext};
use serde_json::{Map, Value};

/// Name of the custom-data section, handled by the merge rule below rather
/// than a registered strategy.
pub const DATA_SECTION: &str = "data";

/// Build the section bundle for one dispatch.
///
/// Custom-data rule: ambient context data and call-time data merge (call-time
/// winning per key) and, when non-empty, the `data` section is included even
/// if absent from the configured list. An empty merge never produces a `data`
/// section, configured or not. This mirrors the section list acting as a
/// request, not a guarantee.
pub fn extract(
    registry: &StrategyRegistry,
    event: &ErrorEvent,
    context: Option<&RequestContext>,
    settings: &NotifierSettings,
    call_data: &Map<String, Value>,
    is_background: bool,
) -> SectionBundle {
    let configured = if is_background {
        &settings.background_sections
    } else {
        &settings.sections
    };
    let merged_data = merge_custom_data(context, call_data);

    let mut bundle = SectionBundle::new();
    for name in configured {
        if name == DATA_SECTION {
            if !merged_data.is_empty() {
                bundle.push(DATA_SECTION, Value::Object(merged_data.clone()));
            }
            continue;
        }

        match registry.get(name) {
            None => {
                log::warn!("No extraction strategy registered for section '{name}', skipping");
            }
            Some(strategy) => match strategy.extract(event, context) {
                Ok(Some(value)) => bundle.push(name.clone(), value),
                Ok(None) => {
                    log::trace!("Section '{name}' empty for this event, omitted");
                }
                Err(err) => {
                    log::warn!("Section '{name}' dropped: {err}");
                }
            },
        }
    }

    // Non-empty custom data always rides along, configured or not
    if !merged_data.is_empty() && !bundle.contains(DATA_SECTION) {
        bundle.push(DATA_SECTION, Value::Object(merged_data));
    }

    bundle
}

fn merge_custom_data(
    context: Option<&RequestContext>,
    call_data: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = context.map(|ctx| ctx.data.clone()).unwrap_or_default();
    for (key, value) in call_data {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
