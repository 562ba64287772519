//! Traits for context extraction
//!
//! A section strategy is a pure function from the failure (and its optional
//! request context) to the structured value rendered under one named section
//! of the notification body. Strategies come from the host environment; the
//! builtins cover the request, session, environment and backtrace sections.

use crate::context::error::ExtractionResult;
use crate::event::{ErrorEvent, RequestContext};
use serde_json::Value;

/// Extraction strategy for one named section.
///
/// Returning `Ok(None)` marks the section as empty for this event, which
/// omits it from the bundle. Errors are isolated by the extractor: the
/// section is dropped with a warning, never a fatal failure.
pub trait SectionStrategy: Send + Sync {
    fn extract(
        &self,
        event: &ErrorEvent,
        context: Option<&RequestContext>,
    ) -> ExtractionResult<Option<Value>>;
}

// Plain functions and closures are usable as strategies directly.
impl<F> SectionStrategy for F
where
    F: Fn(&ErrorEvent, Option<&RequestContext>) -> ExtractionResult<Option<Value>> + Send + Sync,
{
    fn extract(
        &self,
        event: &ErrorEvent,
        context: Option<&RequestContext>,
    ) -> ExtractionResult<Option<Value>> {
        self(event, context)
    }
}
