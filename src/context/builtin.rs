//! Builtin section strategies
//!
//! Host frameworks register their own readers for richer payloads; these
//! defaults read the structured maps carried on `RequestContext` and clean
//! the backtrace carried on the event itself.

use crate::context::error::ExtractionResult;
use crate::event::{ErrorEvent, RequestContext};
use serde_json::{Map, Value};

pub(crate) fn request_section(
    _event: &ErrorEvent,
    context: Option<&RequestContext>,
) -> ExtractionResult<Option<Value>> {
    Ok(context.and_then(|ctx| non_empty_object(&ctx.request)))
}

pub(crate) fn session_section(
    _event: &ErrorEvent,
    context: Option<&RequestContext>,
) -> ExtractionResult<Option<Value>> {
    Ok(context.and_then(|ctx| non_empty_object(&ctx.session)))
}

pub(crate) fn environment_section(
    _event: &ErrorEvent,
    context: Option<&RequestContext>,
) -> ExtractionResult<Option<Value>> {
    Ok(context.and_then(|ctx| non_empty_object(&ctx.environment)))
}

pub(crate) fn backtrace_section(
    event: &ErrorEvent,
    _context: Option<&RequestContext>,
) -> ExtractionResult<Option<Value>> {
    let frames = clean_backtrace(event);
    if frames.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Value::Array(
            frames.into_iter().map(Value::String).collect(),
        )))
    }
}

/// Cleaned, ordered backtrace frames; empty when the event carries none.
pub(crate) fn clean_backtrace(event: &ErrorEvent) -> Vec<String> {
    event
        .backtrace
        .iter()
        .map(|frame| frame.trim().to_string())
        .filter(|frame| !frame.is_empty())
        .collect()
}

fn non_empty_object(map: &Map<String, Value>) -> Option<Value> {
    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map.clone()))
    }
}
